#[cfg(test)]
mod progress_tests {
    use hashdemo_cli::progress::renderer::ProgressRenderer;
    use hashdemo_cli::progress::{ChannelProvider, create_progress_infrastructure};
    use hashdemo_core::{ProgressProvider, ProgressUpdate, SearchMode};
    use tokio::sync::mpsc;

    fn search_update(candidates_tried: u64, total: Option<u64>) -> ProgressUpdate {
        ProgressUpdate::Search {
            mode: SearchMode::BruteForce,
            candidates_tried,
            total,
            current_length: Some(3),
        }
    }

    #[test]
    fn test_progress_renderer_handles_updates() {
        let mut renderer = ProgressRenderer::new();

        renderer.handle_update(ProgressUpdate::Status {
            message: "Running Brute Force search".to_string(),
        });
        renderer.handle_update(search_update(50_000, Some(2_238_976_116)));
        renderer.handle_update(search_update(100_000, Some(2_238_976_116)));

        // Finish should not panic
        renderer.finish();
    }

    #[test]
    fn test_progress_renderer_without_total() {
        let mut renderer = ProgressRenderer::new();
        renderer.handle_update(ProgressUpdate::Search {
            mode: SearchMode::Dictionary,
            candidates_tried: 10,
            total: None,
            current_length: None,
        });
        renderer.finish();
    }

    #[tokio::test]
    async fn test_channel_provider_forwards_until_complete() {
        let (tx, mut rx) = mpsc::channel(10);
        let provider = ChannelProvider::new(tx);

        provider.report(search_update(1, None));
        provider.complete();
        provider.report(search_update(2, None));

        assert_eq!(rx.recv().await, Some(search_update(1, None)));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_full_channel_drops_updates() {
        let (provider, mut rx) = create_progress_infrastructure();

        for i in 0..500 {
            provider.report(search_update(i, None));
        }
        provider.complete();

        let mut received = 0;
        while rx.recv().await.is_some() {
            received += 1;
        }
        assert!(received > 0 && received < 500);
    }
}
