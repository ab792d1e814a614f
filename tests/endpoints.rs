//! Synchronous analysis endpoints against a mock service.

mod common;

use bosonnlp::client::{SentimentModel, SummaryOptions, TagOptions};
use bosonnlp::types::{DependencyParse, Entity};
use bosonnlp::Error;
use chrono::{TimeZone, Utc};
use common::MockService;
use mockito::Matcher;
use serde_json::json;

const TIME_EXPR: &str = "2013年二月二十八日下午四点三十分二十九秒";

#[test]
fn test_sentiment_preserves_order() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/sentiment/analysis")
        .match_query(Matcher::Exact("general".into()))
        .match_body(Matcher::Json(json!(["再也不来了", "美好的世界"])))
        .with_status(200)
        .with_body("[[0.1, 0.9], [0.95, 0.05]]")
        .create();

    let result = svc.client().sentiment(["再也不来了", "美好的世界"]).unwrap();
    assert!(result[0].negative > result[0].positive);
    assert!(result[1].is_positive());
    mock.assert();
}

#[test]
fn test_sentiment_with_model() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/sentiment/analysis")
        .match_query(Matcher::Exact("weibo".into()))
        .with_status(200)
        .with_body("[[0.3, 0.7]]")
        .create();

    let result = svc
        .client()
        .sentiment_with_model("美好的世界", SentimentModel::Weibo)
        .unwrap();
    assert_eq!(result.len(), 1);
    mock.assert();
}

#[test]
fn test_classify() {
    let mut svc = MockService::new();
    let _mock = svc
        .server
        .mock("POST", "/classify/analysis")
        .match_body(Matcher::Json(json!([
            "俄否决安理会谴责叙军战机空袭阿勒颇平民",
            "邓紫棋谈男友林宥嘉：我觉得我比他唱得好",
            "Facebook收购印度初创公司"
        ])))
        .with_status(200)
        .with_body("[5, 4, 8]")
        .create();

    let result = svc
        .client()
        .classify(vec![
            "俄否决安理会谴责叙军战机空袭阿勒颇平民",
            "邓紫棋谈男友林宥嘉：我觉得我比他唱得好",
            "Facebook收购印度初创公司",
        ])
        .unwrap();
    assert_eq!(result, vec![5, 4, 8]);
}

#[test]
fn test_suggest() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/suggest/analysis")
        .match_query(Matcher::UrlEncoded("top_k".into(), "2".into()))
        .match_body(Matcher::Json(json!("北京")))
        .with_status(200)
        .with_body(r#"[[1.0, "北京/ns"], [0.72, "上海/ns"]]"#)
        .create();

    let result = svc.client().suggest("北京", 2).unwrap();
    assert_eq!(result[1].term, "上海/ns");
    assert!(result[0].score >= result[1].score);
    mock.assert();
}

#[test]
fn test_extract_keywords() {
    let mut svc = MockService::new();
    let _mock = svc
        .server
        .mock("POST", "/keywords/analysis")
        .match_query(Matcher::UrlEncoded("top_k".into(), "5".into()))
        .with_status(200)
        .with_body(
            r#"[[0.5, "病毒式"], [0.4, "媒体"], [0.3, "网站"], [0.2, "新闻"], [0.1, "蔓延"]]"#,
        )
        .create();

    let result = svc
        .client()
        .extract_keywords("病毒式媒体网站：让新闻迅速蔓延", 5)
        .unwrap();
    assert_eq!(result.len(), 5);
    assert_eq!(result[0].word, "病毒式");
}

#[test]
fn test_depparser() {
    let mut svc = MockService::new();
    let _mock = svc
        .server
        .mock("POST", "/depparser/analysis")
        .with_status(200)
        .with_body(
            json!([
                {"tag": ["NT", "NN", "VA"], "role": ["TMP", "SBJ", "ROOT"],
                 "head": [2, 2, -1], "word": ["今天", "天气", "好"]},
                {"tag": ["VA", "DEC", "NN"], "role": ["DEC", "NMOD", "ROOT"],
                 "head": [1, 2, -1], "word": ["美好", "的", "世界"]}
            ])
            .to_string(),
        )
        .create();

    let result = svc.client().depparser(["今天天气好", "美好的世界"]).unwrap();
    assert_eq!(
        result[0],
        DependencyParse {
            word: vec!["今天".into(), "天气".into(), "好".into()],
            tag: vec!["NT".into(), "NN".into(), "VA".into()],
            role: vec!["TMP".into(), "SBJ".into(), "ROOT".into()],
            head: vec![2, 2, -1],
        }
    );
    assert_eq!(result[1].word, vec!["美好", "的", "世界"]);
}

#[test]
fn test_ner() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/ner/analysis")
        .match_query(Matcher::UrlEncoded("sensitivity".into(), "2".into()))
        .with_status(200)
        .with_body(
            json!([{
                "entity": [[0, 2, "product_name"], [2, 3, "job_title"], [3, 4, "person_name"]],
                "tag": ["ns", "n", "n", "nr"],
                "word": ["成都", "商报", "记者", "姚永忠"]
            }])
            .to_string(),
        )
        .create();

    let result = svc.client().ner("成都商报记者 姚永忠", 2).unwrap();
    assert_eq!(
        result[0].entity[2],
        Entity {
            start: 3,
            end: 4,
            kind: "person_name".into()
        }
    );
    assert_eq!(result[0].tag, vec!["ns", "n", "n", "nr"]);
    mock.assert();
}

#[test]
fn test_ner_sensitivity_bounds() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/ner/analysis")
        .match_query(Matcher::UrlEncoded("sensitivity".into(), "4".into()))
        .with_status(200)
        .with_body(r#"[{"entity": [], "tag": ["n"], "word": ["记者"]}]"#)
        .expect(1)
        .create();
    let nlp = svc.client();

    assert_eq!(nlp.ner("记者", 4).unwrap().len(), 1);
    for sensitivity in [0, 5] {
        let err = nlp.ner("记者", sensitivity).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }), "got {err:?}");
    }
    mock.assert();
}

#[test]
fn test_tag_sends_default_options() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/tag/analysis")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("space_mode".into(), "0".into()),
            Matcher::UrlEncoded("oov_level".into(), "3".into()),
            Matcher::UrlEncoded("t2s".into(), "0".into()),
            Matcher::UrlEncoded("special_char_conv".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"word": ["成都", "商报", "记者", "姚永忠"], "tag": ["ns", "n", "n", "nr"]}]"#)
        .create();

    let result = svc.client().tag("成都商报记者 姚永忠").unwrap();
    assert_eq!(result[0].word, vec!["成都", "商报", "记者", "姚永忠"]);
    mock.assert();
}

#[test]
fn test_tag_with_options() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/tag/analysis")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("space_mode".into(), "2".into()),
            Matcher::UrlEncoded("t2s".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"word": ["微软"], "tag": ["nz"]}]"#)
        .create();

    let options = TagOptions {
        space_mode: 2,
        t2s: true,
        ..TagOptions::default()
    };
    svc.client().tag_with("微軟", &options).unwrap();
    mock.assert();
}

#[test]
fn test_summary() {
    let mut svc = MockService::new();
    let expected = "腾讯科技讯（刘亚澜）10月22日消息，前优酷土豆技术副总裁黄冬已于日前正式加盟芒果TV，出任CTO一职。";
    let mock = svc
        .server
        .mock("POST", "/summary/analysis")
        .match_body(Matcher::PartialJson(json!({
            "not_exceed": 1,
            "percentage": 0.4,
            "title": "前优酷土豆技术副总裁黄冬加盟芒果TV任CTO"
        })))
        .with_status(200)
        .with_body(json!(expected).to_string())
        .create();

    let result = svc
        .client()
        .summary_with(
            "前优酷土豆技术副总裁黄冬加盟芒果TV任CTO",
            expected,
            &SummaryOptions::new(0.4, true),
        )
        .unwrap();
    assert_eq!(result, expected);
    mock.assert();
}

#[test]
fn test_summary_sends_absolute_limit_as_given() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/summary/analysis")
        .match_body(Matcher::PartialJson(json!({"not_exceed": 0, "percentage": 50.0})))
        .with_status(200)
        .with_body(json!("摘要").to_string())
        .create();

    let result = svc
        .client()
        .summary_with("标题", "正文", &SummaryOptions::new(50.0, false))
        .unwrap();
    assert_eq!(result, "摘要");
    mock.assert();
}

#[test]
fn test_convert_time_no_basetime() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/time/analysis")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pattern".into(), TIME_EXPR.into()),
            Matcher::Regex("^pattern=[^&]*$".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"timestamp": "2013-02-28 16:30:29", "type": "timestamp"}"#)
        .create();

    let result = svc.client().convert_time(TIME_EXPR).unwrap();
    assert_eq!(result.timestamp.as_deref(), Some("2013-02-28 16:30:29"));
    mock.assert();
}

#[test]
fn test_convert_time_with_basetime() {
    let mut svc = MockService::new();
    let mock = svc
        .server
        .mock("POST", "/time/analysis")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pattern".into(), TIME_EXPR.into()),
            Matcher::UrlEncoded("basetime".into(), "1408674823".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"timestamp": "2013-02-28 16:30:29", "type": "timestamp"}"#)
        .expect(2)
        .create();

    let nlp = svc.client();
    let from_epoch = nlp.convert_time_with_base(TIME_EXPR, 1408674823).unwrap();
    let datetime = Utc.timestamp_opt(1408674823, 0).unwrap();
    let from_datetime = nlp.convert_time_with_base(TIME_EXPR, datetime).unwrap();

    assert_eq!(from_epoch.timestamp.as_deref(), Some("2013-02-28 16:30:29"));
    assert_eq!(from_epoch, from_datetime);
    mock.assert();
}
