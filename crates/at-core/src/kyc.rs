//! Identity verification (KYC) completion detection.
//!
//! The provider flow runs in an embedded web view. There is no callback
//! protocol: completion is inferred from the URLs the view navigates to.

/// Substrings that mark a provider page as "verification finished".
pub const KYC_SUCCESS_MARKERS: [&str; 4] = ["success", "completed", "done", "callback"];

/// Whether a navigated-to URL signals that the provider flow has finished.
///
/// Matching is a case-insensitive substring test against the full URL.
pub fn is_completion_url(url: &str) -> bool {
    let url = url.to_ascii_lowercase();
    KYC_SUCCESS_MARKERS
        .iter()
        .any(|marker| url.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_marker_is_detected() {
        for url in [
            "https://verify.example/session/1/success",
            "https://verify.example/flow?status=completed",
            "https://verify.example/done",
            "https://app.example/kyc/callback?session=9",
        ] {
            assert!(is_completion_url(url), "{url} should complete");
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_completion_url("https://verify.example/CALLBACK"));
    }

    #[test]
    fn in_progress_pages_do_not_complete() {
        assert!(!is_completion_url("https://verify.example/session/1/document"));
        assert!(!is_completion_url(""));
    }
}
