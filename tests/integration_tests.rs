//! Integration tests for the Movie Catalog service

use std::io::Write;
use std::sync::Arc;
use std::thread;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::NamedTempFile;
use tower::util::ServiceExt;

use movie_catalog::api::rest::chatbot::{REPLY_FOUND, REPLY_NOT_FOUND};
use movie_catalog::api::{create_router, AppState};
use movie_catalog::{
    filter_by_category, CachedLexicon, Catalog, CatalogError, CsvDatasetSource, LexicalDatabase,
    MatchEngine, Sense, ThesaurusLexicon, Year,
};

const DATASET: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A son films his father.
s2,TV Show,Blood & Water,,Ama Qamata,South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",A teen suspects a swap.
s3,TV Show,Ganglands,Julien Leclercq,Sami Bouajila,,\"September 24, 2021\",2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows, TV Action & Adventure\",A thief protects his family.
s4,Movie,My Little Pony,Robert Cullen,,,\"September 24, 2021\",2021,PG,91 min,\"Comedies, Romantic Movies\",Equestria's divided.
s5,Movie,Sankofa,Haile Gerima,,United States,\"September 24, 2021\",1993,TV-MA,125 min,\"Horror Movies, International Movies\",A model is transported.
s6,TV Show,,,,,,,TV-Y,1 Season,Kids' TV,
";

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load_catalog() -> Catalog {
    let file = write_dataset(DATASET);
    Catalog::load(&CsvDatasetSource::new(file.path())).unwrap()
}

fn ids(records: &[movie_catalog::Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

fn builtin_engine() -> MatchEngine {
    MatchEngine::new(Arc::new(CachedLexicon::new(ThesaurusLexicon::builtin())))
}

struct OfflineLexicon;

impl LexicalDatabase for OfflineLexicon {
    fn senses_of(&self, _word: &str) -> movie_catalog::Result<Vec<Sense>> {
        Err(CatalogError::lexicon("dictionary offline"))
    }
}

// ============================================================
// CATALOG LOADING
// ============================================================

#[test]
fn test_load_renames_and_normalizes() {
    let catalog = load_catalog();
    assert_eq!(catalog.len(), 6);

    let first = catalog.get_by_id("s1").unwrap();
    assert_eq!(first.title, "Dick Johnson Is Dead");
    assert_eq!(first.year, Year::Known(2020));
    assert_eq!(first.category, "Documentaries");
    assert_eq!(first.rating, "PG-13");

    let sparse = catalog.get_by_id("s6").unwrap();
    assert_eq!(sparse.title, "");
    assert_eq!(sparse.year, Year::Unknown);
    assert_eq!(sparse.description, "");
    assert_eq!(sparse.category, "Kids' TV");
}

#[test]
fn test_load_preserves_order() {
    let catalog = load_catalog();
    assert_eq!(
        ids(catalog.get_all()),
        vec!["s1", "s2", "s3", "s4", "s5", "s6"]
    );
}

#[test]
fn test_load_missing_column_fails() {
    let file = write_dataset("show_id,title,release_year,rating,description\ns1,A,2020,R,d\n");
    let result = Catalog::load(&CsvDatasetSource::new(file.path()));
    assert!(matches!(result, Err(CatalogError::Load { .. })));
}

#[test]
fn test_get_by_id_every_record() {
    let catalog = load_catalog();
    for record in catalog.get_all() {
        assert_eq!(catalog.get_by_id(&record.id).unwrap(), record);
    }
    assert!(matches!(
        catalog.get_by_id("s99"),
        Err(CatalogError::NotFound { .. })
    ));
}

// ============================================================
// CATEGORY FILTER AND SEARCH
// ============================================================

#[test]
fn test_filter_by_category() {
    let catalog = load_catalog();

    assert_eq!(ids(&filter_by_category(&catalog, "comed")), vec!["s4"]);
    assert_eq!(ids(&filter_by_category(&catalog, "TV")), vec!["s2", "s3", "s6"]);
    assert_eq!(filter_by_category(&catalog, "").len(), catalog.len());
    assert_eq!(
        filter_by_category(&catalog, "INTERNATIONAL"),
        filter_by_category(&catalog, "international")
    );
}

#[test]
fn test_search_with_builtin_thesaurus() {
    let catalog = load_catalog();
    let engine = builtin_engine();

    let funny = engine.search(&catalog, "funny").unwrap();
    assert!(funny.has_results);
    assert_eq!(ids(&funny.matches), vec!["s4"]);

    let scary = engine.search(&catalog, "Something scary?").unwrap();
    assert_eq!(ids(&scary.matches), vec!["s5"]);

    let kids = engine.search(&catalog, "for the kids").unwrap();
    assert!(ids(&kids.matches).contains(&"s6"));
}

#[test]
fn test_search_without_results() {
    let catalog = load_catalog();
    let engine = builtin_engine();

    let outcome = engine.search(&catalog, "xyzzy").unwrap();
    assert!(!outcome.has_results);
    assert!(outcome.matches.is_empty());

    let empty = engine.search(&catalog, "").unwrap();
    assert!(!empty.has_results);
    assert!(empty.matches.is_empty());
}

#[test]
fn test_search_lexicon_offline() {
    let catalog = load_catalog();
    let engine = MatchEngine::new(Arc::new(OfflineLexicon));

    assert!(matches!(
        engine.search(&catalog, "funny"),
        Err(CatalogError::LexiconUnavailable(_))
    ));
    // No tokens means no lookups, so nothing can fail
    assert!(engine.search(&catalog, "").is_ok());
}

#[test]
fn test_concurrent_searches() {
    let catalog = Arc::new(load_catalog());
    let engine = builtin_engine();

    let mut handles = vec![];
    for i in 0..10 {
        let catalog = Arc::clone(&catalog);
        let engine = engine.clone();
        handles.push(thread::spawn(move || {
            let query = if i % 2 == 0 { "funny" } else { "scary" };
            engine.search(&catalog, query).unwrap()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().unwrap();
        let expected = if i % 2 == 0 { "s4" } else { "s5" };
        assert_eq!(ids(&outcome.matches), vec![expected]);
    }
}

// ============================================================
// HTTP API
// ============================================================

fn app_with(catalog: Catalog, lexicon: Arc<dyn LexicalDatabase>) -> Router {
    create_router(Arc::new(AppState::new(catalog, lexicon)))
}

fn app() -> Router {
    app_with(load_catalog(), Arc::new(ThesaurusLexicon::builtin()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_http_list_movies() {
    let (status, body) = get(app(), "/movies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["data"][0]["id"], "s1");
    assert_eq!(body["data"][0]["category"], "Documentaries");
    assert_eq!(body["data"][5]["year"], "");
}

#[tokio::test]
async fn test_http_list_movies_empty_catalog() {
    let app = app_with(Catalog::default(), Arc::new(ThesaurusLexicon::builtin()));
    let (status, body) = get(app, "/movies").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_http_get_movie() {
    let (status, body) = get(app(), "/movies/s3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Ganglands");
    assert_eq!(body["data"]["year"], 2021);

    let (status, body) = get(app(), "/movies/s99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_http_movies_by_category() {
    let (status, body) = get(app(), "/movies/by_category?category=Tv").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][2]["id"], "s6");
}

#[tokio::test]
async fn test_http_chatbot() {
    let (status, body) = get(app(), "/chatbot?query=funny").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], REPLY_FOUND);
    assert_eq!(body["movies"][0]["id"], "s4");

    let (status, body) = get(app(), "/chatbot?query=xyzzy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], REPLY_NOT_FOUND);
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_http_chatbot_lexicon_offline() {
    let app = app_with(load_catalog(), Arc::new(OfflineLexicon));
    let (status, body) = get(app, "/chatbot?query=funny").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}
