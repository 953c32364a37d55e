//! Sequential page iteration

use super::pagination::{Page, PageRequest};
use super::service::FolderService;
use crate::error::Result;
use crate::models::Folder;
use crate::source::FolderSource;

/// Iterator over every page of an organization's folders.
///
/// Starts from the empty token and follows `next_token` until a page
/// comes back without one. Stops after yielding the first error.
pub struct Pages<'a, S> {
    service: &'a FolderService<S>,
    request: PageRequest,
    done: bool,
}

impl<'a, S: FolderSource> Pages<'a, S> {
    pub(super) fn new(service: &'a FolderService<S>, request: PageRequest) -> Self {
        Self {
            service,
            request,
            done: false,
        }
    }
}

impl<S: FolderSource> Iterator for Pages<'_, S> {
    type Item = Result<Page<Folder>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.service.get_page(&self.request) {
            Ok(page) => {
                if page.has_next_page() {
                    self.request.token = page.next_token.clone();
                } else {
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
