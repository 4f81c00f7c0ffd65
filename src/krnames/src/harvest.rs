//! The harvest loop: fetch, extract and score one identifier at a time.

use std::time::Duration;

use crate::fetch::{FetchResult, Fetcher, Transport};
use crate::kind::{Identifier, Kind};
use crate::next_data::extract_next_data;
use crate::report::{ResultRow, Status};
use crate::score::pick_korean_name;

pub const DEFAULT_BASE_URL: &str = "https://ragnaplace.com/ko/kro";

/// Report progress every this many identifiers
const PROGRESS_EVERY: usize = 50;

/// Page URL for an identifier: `<base>/<kind>/<id>`
pub fn page_url(base: &str, kind: Kind, id: Identifier) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), kind, id)
}

/// Accumulated output of a run
#[derive(Debug, Default)]
pub struct HarvestContext {
    pub rows: Vec<ResultRow>,
    pub ok_count: usize,
}

impl HarvestContext {
    fn record(&mut self, row: ResultRow) {
        if row.status.is_ok() {
            self.ok_count += 1;
        }
        self.rows.push(row);
    }
}

/// Sequential harvester for one kind
pub struct Harvester<T> {
    fetcher: Fetcher<T>,
    base_url: String,
    kind: Kind,
    delay: Duration,
}

impl<T: Transport> Harvester<T> {
    pub fn new(
        fetcher: Fetcher<T>,
        base_url: impl Into<String>,
        kind: Kind,
        delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            kind,
            delay,
        }
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }

    /// Resolve one identifier into a row. Never fails; problems become the status.
    pub fn process(&self, id: Identifier, ctx: &mut HarvestContext) {
        let url = page_url(&self.base_url, self.kind, id);

        let (name_kr, status) = match self.fetcher.fetch(&url) {
            FetchResult::Failed(failure) => (String::new(), Status::Fetch(failure)),
            FetchResult::Ok(html) => match extract_next_data(&html) {
                None => (String::new(), Status::NoNextData),
                Some(payload) => match pick_korean_name(&payload) {
                    Some(name) => (name, Status::Ok),
                    None => (String::new(), Status::NoKrFound),
                },
            },
        };

        tracing::debug!("{} {} -> {} {:?}", self.kind, id, status, name_kr);

        ctx.record(ResultRow {
            id,
            kind: self.kind,
            name_kr,
            source_url: url,
            status,
        });
    }

    /// Process `ids` in order, pausing `delay` after each one
    pub fn run(&self, ids: &[Identifier]) -> HarvestContext {
        let mut ctx = HarvestContext::default();
        let total = ids.len();

        for (i, &id) in ids.iter().enumerate() {
            self.process(id, &mut ctx);

            let done = i + 1;
            if done % PROGRESS_EVERY == 0 || done == total {
                tracing::info!("progress {}/{} (ok={})", done, total, ctx.ok_count);
            }

            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        ctx
    }
}
