use tests::*;

use loadplan::{
    core::{
        schema::{app, ser},
        stmt::{LoadOption, LoadPath, LoaderStrategy, Query},
    },
    NoLoadStyle, SchemaFilter,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn detail_out() -> Value {
    json!({
        "id": 1,
        "first_name": "a",
        "last_name": "b",
        "email": "c",
        "images": [{ "url": "images.example.com/receiver.jpg" }],
        "likes": [{ "id": 1, "image": { "url": "images.example.com/giver.jpg" } }],
    })
}

/// Fetch user 1 with `query` and dump it through `UserDetail`, returning the
/// data and the number of queries each step issued.
fn fetch_and_dump(fixture: &Fixture, query: &Query) -> (Value, usize, usize) {
    let session = fixture.session();

    let mut user = session.get(query, 1).unwrap();
    let fetch = session.exec_log().len();

    let data = dump(&fixture.app, &fixture.registry, &fixture.schema("UserDetail"), &mut user).unwrap();
    let total = session.exec_log().len();

    (data, fetch, total - fetch)
}

#[test]
fn select_is_one_query() {
    init_logging();
    let fixture = Fixture::new().unwrap();
    let session = fixture.session();

    let user = session.get(&Query::select(fixture.model("User")), 2).unwrap();
    assert_eq!(user.key(), 2);
    assert_eq!(
        session.exec_log().pop(),
        Op::Select {
            model: "User".to_string()
        }
    );
    assert!(session.exec_log().is_empty());
}

#[test]
fn unfiltered_detail_loads_relations_on_access() {
    init_logging();
    let fixture = Fixture::new().unwrap();

    let (data, fetch_queries, dump_queries) = fetch_and_dump(&fixture, &Query::select(fixture.model("User")));

    assert_eq!(data, detail_out());
    assert_eq!(fetch_queries, 1);
    assert_eq!(dump_queries, 3);
}

#[test]
fn eager_filter_fetches_everything_up_front() {
    init_logging();
    let fixture = Fixture::new().unwrap();

    let filter = SchemaFilter::builder("UserDetail").eager(true).build();
    assert_eq!(filter.loader(), LoaderStrategy::Joined);

    let query = filter
        .apply(&fixture.app, &fixture.registry, &Query::select(fixture.model("User")), None)
        .unwrap();

    let (data, fetch_queries, dump_queries) = fetch_and_dump(&fixture, &query);

    assert_eq!(data, detail_out());
    assert_eq!(fetch_queries, 1);
    assert_eq!(dump_queries, 0);
}

#[test]
fn lazy_filter_defers_nothing_the_schema_reads() {
    init_logging();
    let fixture = Fixture::new().unwrap();

    let filter = SchemaFilter::new("UserDetail");
    assert_eq!(filter.loader(), LoaderStrategy::Default);

    let query = filter
        .apply(&fixture.app, &fixture.registry, &Query::select(fixture.model("User")), None)
        .unwrap();

    let session = fixture.session();
    let mut user = session.get(&query, 1).unwrap();
    let data = dump(&fixture.app, &fixture.registry, &fixture.schema("UserDetail"), &mut user).unwrap();

    assert_eq!(data, detail_out());

    let log = session.exec_log();
    assert_eq!(log.count(|op| matches!(op, Op::Select { .. })), 1);
    assert_eq!(log.count(|op| matches!(op, Op::LoadRelation { .. })), 3);
    assert_eq!(log.count(|op| matches!(op, Op::LoadColumn { .. })), 0);
}

#[test]
fn filtered_instances_defer_and_suppress() {
    init_logging();
    let fixture = Fixture::new().unwrap();

    let query = loadplan::project(
        &fixture.app,
        &fixture.registry,
        &Query::select(fixture.model("User")),
        "UserDetail",
        None,
        true,
    )
    .unwrap();

    let session = fixture.session();
    let mut user = session.get(&query, 2).unwrap();

    assert!(user.is_loaded("id"));
    assert!(user.is_loaded("email"));
    assert!(user.is_resolved("images"));
    assert!(user.is_resolved("default_image"));
    assert_empty!(user.related("default_image").unwrap());

    let images = user.related("images").unwrap();
    assert_eq!(images.len(), 2);

    let image = &mut images[0];
    assert!(image.is_loaded("url"));
    assert!(!image.is_loaded("created_at"));
    assert_empty!(image.related("user").unwrap());

    // Reading a deferred column issues a query.
    assert_eq!(image.column("created_at").unwrap(), json!("2017-05-31T12:01:00Z"));

    let log = session.exec_log();
    assert_eq!(log.pop(), Op::Select { model: "User".to_string() });
    assert_eq!(
        log.pop(),
        Op::LoadColumn {
            model: "Image".to_string(),
            column: "created_at".to_string(),
        }
    );
    assert!(log.is_empty());
}

#[test]
fn wildcard_filter_matches_per_relation_filter() {
    init_logging();
    let fixture = Fixture::new().unwrap();
    let root = Query::select(fixture.model("User"));

    for noload_style in [NoLoadStyle::PerRelation, NoLoadStyle::Wildcard] {
        let query = SchemaFilter::builder("UserDetail")
            .eager(true)
            .noload_style(noload_style)
            .build()
            .apply(&fixture.app, &fixture.registry, &root, None)
            .unwrap();

        let (data, fetch_queries, dump_queries) = fetch_and_dump(&fixture, &query);

        assert_eq!(data, detail_out());
        assert_eq!((fetch_queries, dump_queries), (1, 0), "{noload_style:?}");
    }
}

#[test]
fn hand_written_projection() {
    init_logging();
    let fixture = Fixture::new().unwrap();

    let root = LoadPath::root();
    let images = root.join(LoaderStrategy::Joined, "images");
    let likes = root.join(LoaderStrategy::Joined, "likes");
    let like_image = likes.join(LoaderStrategy::Joined, "image");

    let query = Query::select(fixture.model("User"))
        .with_options(
            &fixture.app,
            [
                LoadOption::noload_all(root.clone()),
                LoadOption::load(root.clone(), LoaderStrategy::Joined, "images"),
                LoadOption::noload_all(images.clone()),
                LoadOption::load_only(images, ["id", "url"]),
                LoadOption::load(root.clone(), LoaderStrategy::Joined, "likes"),
                LoadOption::noload_all(likes.clone()),
                LoadOption::load(likes.clone(), LoaderStrategy::Joined, "image"),
                LoadOption::noload_all(like_image.clone()),
                LoadOption::load_only(like_image, ["id", "url"]),
                LoadOption::load_only(likes, ["id"]),
                LoadOption::load_only(root, ["id", "first_name", "last_name", "email"]),
            ],
        )
        .unwrap();

    let (data, fetch_queries, dump_queries) = fetch_and_dump(&fixture, &query);

    assert_eq!(data, detail_out());
    assert_eq!(fetch_queries, 1);
    assert_eq!(dump_queries, 0);
}

#[test]
fn explicit_model_must_fit_the_query() {
    init_logging();

    // Both models carry the same column names, so directives planned for
    // one would also verify against the other.
    let mut builder = app::Schema::builder();
    builder.model("Author").key("id").column("name");
    builder.model("Tag").key("id").column("name");
    let app = builder.build().unwrap();
    let author = app.model_by_name("Author").unwrap().id;
    let tag = app.model_by_name("Tag").unwrap().id;

    let mut registry = ser::Registry::new();
    registry.register(ser::Schema::builder("TagSchema").scalar("name").build());

    let filter = SchemaFilter::new("TagSchema");

    let err = assert_err!(filter.apply(&app, &registry, &Query::select(author), Some(tag)));
    assert!(err.is_invalid_load_option());
    assert_eq!(
        err.to_string(),
        "invalid load option: plan for `Tag` applied to a query rooted at `Author`"
    );

    let err = assert_err!(loadplan::project(
        &app,
        &registry,
        &Query::select(author),
        "TagSchema",
        Some(tag),
        true,
    ));
    assert!(err.is_invalid_load_option());

    let query = Query::select(tag);
    let inferred = filter.apply(&app, &registry, &query, None).unwrap();
    let explicit = filter.apply(&app, &registry, &query, Some(tag)).unwrap();
    assert_eq!(inferred, explicit);
    assert_eq!(
        explicit.option_set(),
        BTreeSet::from([LoadOption::load_only(LoadPath::root(), ["name"])])
    );
}
