use serde_json::json;
use tikscout_finder::testing::{CountingPacer, MockSource, candidate};
use tikscout_finder::{Criteria, FinderConfig, InfluencerFinder, NoDelay, RunStats};
use tikscout_tiktok::TikTokClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config() -> FinderConfig {
    FinderConfig::builder()
        .criteria(
            Criteria::builder()
                .max_followers(550_000)
                .min_avg_views(40_000.0)
                .build(),
        )
        .results_per_keyword(50)
        .build()
}

#[tokio::test]
async fn tech_keyword_keeps_only_the_high_view_account() {
    let source = MockSource::new()
        .on_search("tech", vec![vec![candidate("user_a", 12_000), candidate("user_b", 80_000)]])
        .on_videos("sec-user_a", &[10_000, 20_000, 30_000])
        .on_videos("sec-user_b", &[50_000, 50_000, 50_000]);
    let finder = InfluencerFinder::new(source, CountingPacer::default(), config());

    let report = finder.find(&["tech"]).await.unwrap();

    assert_eq!(report.influencers.len(), 1);
    let b = &report.influencers[0];
    assert_eq!(b.username, "user_b");
    assert_eq!(b.avg_views, 50_000.0);
    assert_eq!(b.niche, "tech");
    assert_eq!(report.stats.rejected_low_views, 1);
    assert_eq!(finder.source().search_calls().len(), 2);
}

#[tokio::test]
async fn username_found_under_two_keywords_appears_once() {
    let source = MockSource::new()
        .on_search("fitness", vec![vec![candidate("coach", 20_000)]])
        .on_search("wellness", vec![vec![candidate("coach", 20_000)]])
        .on_videos("sec-coach", &[75_000, 85_000]);
    let finder = InfluencerFinder::new(source, CountingPacer::default(), config());

    let report = finder.find(&["fitness", "wellness"]).await.unwrap();

    assert_eq!(report.influencers.len(), 1);
    assert_eq!(report.influencers[0].niche, "wellness");
    assert_eq!(report.influencers[0].avg_views, 80_000.0);
}

#[tokio::test]
async fn empty_search_never_reaches_the_filter() {
    let finder = InfluencerFinder::new(MockSource::new(), CountingPacer::default(), config());

    let report = finder.find(&["tech"]).await.unwrap();

    assert!(report.influencers.is_empty());
    assert_eq!(report.stats.candidates_screened, 0);
    assert!(finder.source().video_calls().is_empty());
}

#[tokio::test]
async fn candidate_without_videos_is_dropped() {
    let source = MockSource::new()
        .on_search("tech", vec![vec![candidate("silent", 100)]])
        .on_videos("sec-silent", &[]);
    let finder = InfluencerFinder::new(source, CountingPacer::default(), config());
    let mut stats = RunStats::default();

    let candidates = finder.search_keyword("tech", 50, &mut stats).await.unwrap();
    let qualified = finder
        .qualify_candidates(&candidates, "tech", &mut stats)
        .await
        .unwrap();

    assert!(qualified.is_empty());
    assert_eq!(finder.source().video_calls_for("sec-silent"), 1);
    assert_eq!(stats.rejected_no_videos, 1);
}

fn search_user(unique_id: &str, followers: u64) -> serde_json::Value {
    json!({
        "user": {
            "uniqueId": unique_id,
            "secUid": format!("sec-{unique_id}"),
            "nickname": unique_id.to_uppercase(),
            "signature": "building things",
            "followerCount": followers,
            "followingCount": 12,
            "videoCount": 40,
            "verified": false
        }
    })
}

fn item_list(play_counts: &[u64]) -> serde_json::Value {
    let items: Vec<_> = play_counts
        .iter()
        .map(|p| json!({ "stats": { "playCount": p } }))
        .collect();
    json!({ "itemList": items })
}

#[tokio::test]
async fn runs_against_the_http_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/user/full/"))
        .and(query_param("keyword", "tech"))
        .and(query_param("cursor", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userInfo": { "user_list": [search_user("user_a", 12_000), search_user("user_b", 80_000)] }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/user/full/"))
        .and(query_param("keyword", "tech"))
        .and(query_param("cursor", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userInfo": { "user_list": [] }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/post/item_list/"))
        .and(query_param("secUid", "sec-user_a"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(item_list(&[10_000, 20_000, 30_000])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/post/item_list/"))
        .and(query_param("secUid", "sec-user_b"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(item_list(&[50_000, 50_000, 50_000])),
        )
        .mount(&server)
        .await;

    let client = TikTokClient::with_base_url(server.uri(), None).unwrap();
    let finder = InfluencerFinder::new(client, NoDelay, config());

    let report = finder.find(&["tech"]).await.unwrap();

    assert_eq!(report.influencers.len(), 1);
    let b = &report.influencers[0];
    assert_eq!(b.username, "user_b");
    assert_eq!(b.display_name, "USER_B");
    assert_eq!(b.sec_uid, "sec-user_b");
    assert_eq!(b.avg_views, 50_000.0);
    assert_eq!(b.niche, "tech");
    assert_eq!(report.stats.failures(), 0);
}

#[tokio::test]
async fn http_failures_degrade_to_empty_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/user/full/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = TikTokClient::with_base_url(server.uri(), None).unwrap();
    let finder = InfluencerFinder::new(client, NoDelay, config());

    let report = finder.find(&["tech", "ai"]).await.unwrap();

    assert!(report.influencers.is_empty());
    assert_eq!(report.stats.search_calls, 2);
    assert_eq!(report.stats.transport_failures, 2);
}
