use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{fetch_json, Transport};
use crate::error::{Error, Result};

pub const PER_PAGE: usize = 100;

/// A decoded page body that wraps a list of items.
pub trait Page: DeserializeOwned {
    type Item;

    fn total_count(&self) -> Option<usize> {
        None
    }

    fn into_items(self) -> Vec<Self::Item>;
}

/// Lazily walks `{base}?per_page=100&page=N` starting at page 1.
///
/// Ends after the first page holding fewer than `PER_PAGE` items, or after
/// yielding the first error.
pub struct Pages<'a, C: ?Sized, P> {
    client: &'a C,
    base: String,
    page: usize,
    done: bool,
    _page: PhantomData<P>,
}

impl<'a, C, P> Pages<'a, C, P>
where
    C: Transport + ?Sized,
    P: Page,
{
    pub fn new(client: &'a C, base: impl Into<String>) -> Self {
        Pages {
            client,
            base: base.into(),
            page: 1,
            done: false,
            _page: PhantomData,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}?per_page={}&page={}", self.base, PER_PAGE, self.page)
    }
}

impl<'a, C, P> Iterator for Pages<'a, C, P>
where
    C: Transport + ?Sized,
    P: Page,
{
    type Item = Result<Vec<P::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let endpoint = self.endpoint();
        let items = match fetch_json::<P, C>(self.client, &endpoint) {
            Ok(page) => {
                if let (1, Some(total)) = (self.page, page.total_count()) {
                    debug!(total, base = %self.base, "collection size");
                }
                page.into_items()
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        debug!(page = self.page, count = items.len(), "fetched {}", endpoint);
        if items.len() < PER_PAGE {
            self.done = true;
        }
        self.page += 1;
        Some(Ok(items))
    }
}

/// Collects every item behind a paged collection endpoint, in response order.
pub fn fetch_all_pages<P, C>(client: &C, base: &str) -> Result<Vec<P::Item>>
where
    C: Transport + ?Sized,
    P: Page,
{
    Pages::<C, P>::new(client, base).try_fold(Vec::new(), |mut all, page| {
        all.extend(page?);
        Ok::<_, Error>(all)
    })
}
