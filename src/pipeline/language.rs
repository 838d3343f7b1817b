//! Dominant-language inference from recent repository activity.

use tracing::debug;

use crate::github::GitHubProvider;

/// How many recent repositories are sampled. The recency bias is
/// intentional: current activity counts for more than historical volume.
pub const RECENT_REPO_LIMIT: u32 = 10;

/// Infer the most-represented primary language across the user's most
/// recently pushed repositories.
///
/// Ties break toward the language seen first in recency order (a stable
/// fold over the ordered list, kept exactly for reproducibility). Returns
/// `None` when no repository carries a language, or when the listing fails
/// for any reason; failure here is absorbed, never propagated.
pub(crate) async fn infer_dominant_language(
    provider: &dyn GitHubProvider,
    username: &str,
) -> Option<String> {
    let repos = match provider.list_recent_repos(username, RECENT_REPO_LIMIT).await {
        Ok(repos) => repos,
        Err(err) => {
            debug!(login = %username, %err, "repo listing failed, skipping language inference");
            return None;
        }
    };

    // Counts keyed in first-seen order; a Vec keeps that order observable
    // for the tie-break below.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for repo in repos {
        let Some(language) = repo.language else {
            continue;
        };
        match counts.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language, 1)),
        }
    }

    // Strictly-greater replacement keeps the earliest entry on ties.
    let mut best: Option<(String, usize)> = None;
    for (language, count) in counts {
        match &best {
            Some((_, top)) if *top >= count => {}
            _ => best = Some((language, count)),
        }
    }

    best.map(|(language, _)| language)
}
