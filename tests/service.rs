use std::{sync::Arc, time::Duration};

use sentiment_engine::{
    db::{DASHBOARD_STATS_KEY, HISTORY_KEY},
    models::{Sentiment, SentimentFilter},
    AnalysisService, Database, FixedTieBreaker, LatencyProfile, Scorer,
};

fn deterministic_scorer() -> Scorer {
    Scorer::with_tie_breaker(Arc::new(FixedTieBreaker(0.0)))
}

async fn in_memory_service() -> AnalysisService {
    let db = Database::in_memory().unwrap();
    AnalysisService::open(db, deterministic_scorer(), LatencyProfile::none()).await
}

#[tokio::test]
async fn excellent_service_example() {
    let service = in_memory_service().await;
    let result = service
        .analyze_text("The service was excellent and very helpful!")
        .await
        .unwrap();

    assert_eq!(result.polarity, 0.35);
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.word_count, 7);
}

#[tokio::test]
async fn terrible_waste_example() {
    let service = in_memory_service().await;
    let result = service
        .analyze_text("This was terrible and a waste of time")
        .await
        .unwrap();

    assert_eq!(result.polarity, -0.4);
    assert_eq!(result.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn pagination_over_twenty_five_records() {
    let service = in_memory_service().await;
    let texts: Vec<String> = (0..25).map(|n| format!("feedback number {n}")).collect();
    service.analyze_batch(&texts).await.unwrap();

    let page = service.get_history(3, 10).await.unwrap();
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.pagination.total, 25);
    assert_eq!(page.pagination.total_pages, 3);
    // newest-first: the last batch item leads page one, the first item ends page three
    assert_eq!(page.data.last().unwrap().text, "feedback number 0");

    let beyond = service.get_history(10, 10).await.unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.pagination.total_pages, 3);
    assert_eq!(beyond.pagination.page, 10);
}

#[tokio::test]
async fn history_is_capped_at_one_hundred() {
    let service = in_memory_service().await;
    for n in 0..150 {
        service.analyze_text(&format!("entry {n}")).await.unwrap();
    }

    let page = service.get_history(1, 200).await.unwrap();
    assert_eq!(page.pagination.total, 100);
    assert_eq!(page.data.first().unwrap().text, "entry 149");
    assert_eq!(page.data.last().unwrap().text, "entry 50");

    let stats = service.get_stats().await;
    assert_eq!(stats.total_analysis, 100);
}

#[tokio::test]
async fn stats_always_match_history() {
    let service = in_memory_service().await;
    service
        .analyze_batch(&[
            "great and helpful staff, amazing",
            "awful, broken and useless",
            "it was fine",
            "",
            "   ",
        ])
        .await
        .unwrap();
    service.analyze_text("I love it!").await.unwrap();

    let stats = service.get_stats().await;
    let history = service.get_history(1, 100).await.unwrap();

    assert_eq!(stats.total_analysis, history.pagination.total);
    assert_eq!(stats.total_analysis, 4);
    assert_eq!(stats.positive + stats.negative + stats.neutral, stats.total_analysis);
    assert_eq!(stats.positive, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.neutral, 1);

    let expected = history.data.iter().map(|r| r.polarity).sum::<f64>() / 4.0;
    assert!((stats.average_polarity - expected).abs() < 0.001);

    assert_eq!(service.last_stats_snapshot().await, Some(stats));
}

#[tokio::test]
async fn batch_summary_and_validation() {
    let service = in_memory_service().await;
    let outcome = service
        .analyze_batch(&["best purchase ever, so happy", "worst support, totally useless", "meh"])
        .await
        .unwrap();

    assert_eq!(outcome.summary.total, 3);
    assert_eq!(outcome.summary.positive, 1);
    assert_eq!(outcome.summary.negative, 1);
    assert_eq!(outcome.summary.neutral, 1);
    assert_eq!(outcome.data[0].text, "best purchase ever, so happy");

    let empty: [&str; 0] = [];
    assert!(service.analyze_batch(&empty).await.unwrap_err().is_validation());
    assert!(service
        .analyze_batch(&["", "  ", "\n"])
        .await
        .unwrap_err()
        .is_validation());

    assert_eq!(service.get_stats().await.total_analysis, 3);
}

#[tokio::test]
async fn search_filters_by_text_and_sentiment() {
    let service = in_memory_service().await;
    service.analyze_text("Great delivery, GREAT packaging!").await.unwrap();
    service.analyze_text("Delivery was terrible and broken").await.unwrap();
    service.analyze_text("Support replied quickly").await.unwrap();

    let all = service.search("DELIVERY", SentimentFilter::All).await;
    assert_eq!(all.summary.total, 2);
    assert_eq!(all.data[0].text, "Delivery was terrible and broken");
    assert_eq!(all.summary.query, "DELIVERY");
    assert_eq!(all.summary.sentiment_filter, SentimentFilter::All);

    let positive = service.search("delivery", SentimentFilter::Positive).await;
    assert_eq!(positive.data.len(), 1);
    assert_eq!(positive.data[0].sentiment, Sentiment::Positive);

    let none = service.search("refund", SentimentFilter::All).await;
    assert!(none.data.is_empty());

    let everything = service.search("", SentimentFilter::All).await;
    assert_eq!(everything.summary.total, 3);
}

#[tokio::test]
async fn clear_resets_everything() {
    let service = in_memory_service().await;
    service.analyze_text("amazing").await.unwrap();
    service.get_stats().await;

    let ack = service.clear_history().await;
    assert!(ack.success);

    let stats = service.get_stats().await;
    assert_eq!(stats.total_analysis, 0);
    assert_eq!(stats.positive, 0);
    assert_eq!(stats.negative, 0);
    assert_eq!(stats.neutral, 0);
    assert_eq!(stats.average_polarity, 0.0);
    assert!(service.get_history(1, 10).await.unwrap().data.is_empty());
}

#[tokio::test]
async fn export_contains_history_and_fresh_stats() {
    let service = in_memory_service().await;
    service.analyze_text("brilliant work").await.unwrap();
    service.analyze_text("poor follow-up").await.unwrap();

    let snapshot = service.export_snapshot().await;
    assert_eq!(snapshot.metadata.total_records, 2);
    assert_eq!(snapshot.metadata.version, "1.0");
    assert_eq!(snapshot.statistics.total_analysis, 2);
    assert_eq!(snapshot.analyses.len(), 2);
    assert_eq!(snapshot.analyses[0].text, "poor follow-up");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["metadata"]["exportedAt"].is_string());
    assert_eq!(json["statistics"]["totalAnalysis"], 2);
}

#[tokio::test]
async fn trends_reflect_history() {
    let service = in_memory_service().await;
    service
        .analyze_batch(&["great food", "great view and good staff", "bad parking"])
        .await
        .unwrap();

    let report = service.get_trends(2).await;
    assert_eq!(report.daily.iter().map(|d| d.positive + d.negative + d.neutral).sum::<usize>(), 3);
    assert_eq!(report.markers.len(), 2);
    assert_eq!(report.markers[0].word, "great");
    assert_eq!(report.markers[0].count, 2);
    assert_eq!(
        report.distribution.positive + report.distribution.negative + report.distribution.neutral,
        100
    );
}

#[tokio::test]
async fn history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.sqlite3");

    {
        let db = Database::new(path.clone()).unwrap();
        let service = AnalysisService::open(db, deterministic_scorer(), LatencyProfile::none()).await;
        service.analyze_text("fantastic experience").await.unwrap();
        service.analyze_batch(&["angry customer", "ok"]).await.unwrap();
    }

    let db = Database::new(path).unwrap();
    let service = AnalysisService::open(db, deterministic_scorer(), LatencyProfile::none()).await;
    let page = service.get_history(1, 10).await.unwrap();

    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.data[0].text, "ok");
    assert_eq!(page.data[2].text, "fantastic experience");
}

#[tokio::test]
async fn corrupt_history_degrades_to_empty() {
    let db = Database::in_memory().unwrap();
    db.set_value(HISTORY_KEY, "[{\"broken\": true".into())
        .await
        .unwrap();

    let service = AnalysisService::open(db, deterministic_scorer(), LatencyProfile::none()).await;
    assert_eq!(service.get_stats().await.total_analysis, 0);

    // the next write replaces the unreadable record
    service.analyze_text("satisfied").await.unwrap();
    assert_eq!(service.get_history(1, 10).await.unwrap().pagination.total, 1);
}

#[tokio::test]
async fn unreadable_stats_record_reads_as_missing() {
    let db = Database::in_memory().unwrap();
    let service =
        AnalysisService::open(db.clone(), deterministic_scorer(), LatencyProfile::none()).await;

    db.set_value(DASHBOARD_STATS_KEY, "{\"totalAnalysis\": \"many\"".into())
        .await
        .unwrap();
    assert_eq!(service.last_stats_snapshot().await, None);

    // fresh stats overwrite the bad record
    let stats = service.get_stats().await;
    assert_eq!(service.last_stats_snapshot().await, Some(stats));
}

#[tokio::test]
async fn lost_storage_keeps_memory_authoritative() {
    let db = Database::in_memory().unwrap();
    let service =
        AnalysisService::open(db.clone(), deterministic_scorer(), LatencyProfile::none()).await;
    service.analyze_text("wonderful stay").await.unwrap();

    db.execute(|conn| {
        conn.execute_batch("DROP TABLE kv_store")?;
        Ok(())
    })
    .await
    .unwrap();

    let result = service.analyze_text("terrible and broken").await.unwrap();
    assert_eq!(result.sentiment, Sentiment::Negative);

    let stats = service.get_stats().await;
    assert_eq!(stats.total_analysis, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(service.last_stats_snapshot().await, None);

    let ack = service.clear_history().await;
    assert!(!ack.success);
    assert_eq!(service.get_stats().await.total_analysis, 0);
    assert!(service.get_history(1, 10).await.unwrap().data.is_empty());
}

#[tokio::test]
async fn concurrent_analyses_are_all_recorded() {
    let service = in_memory_service().await;
    let mut handles = Vec::new();
    for n in 0..40 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.analyze_text(&format!("parallel entry {n}")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stats = service.get_stats().await;
    assert_eq!(stats.total_analysis, 40);

    let page = service.get_history(1, 100).await.unwrap();
    let mut ids: Vec<_> = page.data.iter().map(|r| r.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 40);
}

#[tokio::test]
async fn simulated_latency_delays_results() {
    let db = Database::in_memory().unwrap();
    let latency = LatencyProfile {
        analyze: Duration::from_millis(40),
        ..LatencyProfile::none()
    };
    let service = AnalysisService::open(db, deterministic_scorer(), latency).await;

    let started = tokio::time::Instant::now();
    service.analyze_text("good").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(40));
}
