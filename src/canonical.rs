//! The canonical-name selector.

use crate::error::GaiError;
use crate::request::Request;
use crate::state::next_state;

/// Normalise the canonical name onto the head node.
///
/// Numeric and DNS steps attach the canonical name in different
/// positions in the chain; this step lifts it onto the head so callers
/// only ever have to look there.
pub(crate) fn find_canonical(mut req: Box<Request>) {
    let already_on_head = req
        .chain
        .head()
        .map(|h| h.canonical_name.is_some())
        .unwrap_or(false);

    if !already_on_head {
        let found = req
            .chain
            .iter()
            .find_map(|node| node.canonical_name.clone());

        match found {
            Some(name) => {
                if let Some(head) = req.chain.head_mut() {
                    head.canonical_name = Some(name);
                }
            }
            None => {
                req.fail(GaiError::BadName);
                return;
            }
        }
    }

    next_state(req);
}
