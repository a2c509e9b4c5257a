//! Blocker filter - which candidates may contribute cover
//!
//! Pure list filtering, no geometry. Exclusion rules apply in a fixed order;
//! any single rule removes the candidate.

use crate::core::config::DetectionConfig;
use crate::core::types::TokenId;
use crate::scene::Token;

/// Externally supplied visibility relation, queried from the configured
/// perspective token. Used only when `ignore_undetected` is active.
pub trait VisibilityProvider {
    fn detects(&self, perspective: TokenId, candidate: TokenId) -> bool;
}

/// Default provider: every candidate is detected.
pub struct AllVisible;

impl VisibilityProvider for AllVisible {
    fn detects(&self, _perspective: TokenId, _candidate: TokenId) -> bool {
        true
    }
}

/// Filter the candidate list down to the tokens allowed to block the line
/// between `observer` and `subject`.
///
/// `observer` is `None` when the evaluation is anchored on a bare point; the
/// ally filter then uses the config's acting faction, and visibility queries
/// fall back to the configured perspective (no perspective means nothing is
/// undetected).
pub fn eligible_blockers<'a>(
    observer: Option<&Token>,
    subject: &Token,
    candidates: &'a [Token],
    config: &DetectionConfig,
    visibility: &dyn VisibilityProvider,
) -> Vec<&'a Token> {
    let observer_faction = observer
        .and_then(|o| o.alliance.as_deref())
        .or(config.acting_faction.as_deref());
    let perspective = config.perspective.or(observer.map(|o| o.id));

    candidates
        .iter()
        .filter(|candidate| {
            // 1. Never count either principal.
            if Some(candidate.id) == observer.map(|o| o.id) || candidate.id == subject.id {
                return false;
            }
            // 2. Non-blocking actor kinds.
            if !candidate.kind.can_block() {
                return false;
            }
            // 3. Explicit opt-out, when honored.
            if config.filters.respect_exemption_flag && candidate.ignore_as_cover {
                return false;
            }
            // 4. Host-hidden tokens never block, regardless of config.
            if candidate.hidden {
                return false;
            }
            // 5. Undetected by the perspective token.
            if config.filters.ignore_undetected {
                if let Some(perspective) = perspective {
                    if !visibility.detects(perspective, candidate.id) {
                        return false;
                    }
                }
            }
            // 6. Zero vitality.
            if config.filters.ignore_dead && candidate.is_dead() {
                return false;
            }
            // 7. Prone bodies, unless allowed.
            if !config.filters.allow_prone_blockers && candidate.is_prone() {
                return false;
            }
            // 8. Allies of the observer.
            if config.filters.ignore_allies {
                if let (Some(observer_faction), Some(faction)) =
                    (observer_faction, candidate.alliance.as_deref())
                {
                    if observer_faction == faction {
                        return false;
                    }
                }
            }
            true
        })
        .collect()
}
