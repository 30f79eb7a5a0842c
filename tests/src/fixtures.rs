//! A small photo-sharing domain: users own images and like each other's
//! images.

use crate::{Session, Store};

use loadplan_core::{
    schema::{app, ser},
    Result,
};

use serde_json::json;
use std::sync::Arc;

/// Metadata, schemas and rows shared by the integration tests.
#[derive(Debug)]
pub struct Fixture {
    pub app: Arc<app::Schema>,
    pub registry: ser::Registry,
    pub store: Arc<Store>,
}

impl Fixture {
    pub fn new() -> Result<Fixture> {
        let app = Arc::new(app_schema()?);
        let registry = registry(&app)?;
        let store = Arc::new(store(app.clone())?);

        Ok(Fixture {
            app,
            registry,
            store,
        })
    }

    pub fn model(&self, name: &str) -> app::ModelId {
        self.app.model_by_name(name).unwrap().id
    }

    pub fn schema(&self, name: &str) -> Arc<ser::Schema> {
        self.registry
            .get(name)
            .unwrap_or_else(|| panic!("schema `{name}` is not registered"))
            .clone()
    }

    pub fn session(&self) -> Session {
        Session::new(self.store.clone())
    }
}

pub fn app_schema() -> Result<app::Schema> {
    let mut builder = app::Schema::builder();

    builder
        .model("User")
        .key("id")
        .nullable_column("first_name")
        .nullable_column("last_name")
        .nullable_column("email")
        .has_many("images", "Image")
        .has_one("default_image", "Image")
        .has_many("likes", "Like");

    builder
        .model("Image")
        .key("id")
        .nullable_column("url")
        .column("created_at")
        .column("is_default")
        .nullable_column("user_id")
        .belongs_to("user", "User");

    builder
        .model("Like")
        .key("id")
        .nullable_column("user_id")
        .nullable_column("image_id")
        .column("created_at")
        .belongs_to("user", "User")
        .belongs_to("image", "Image");

    builder.build()
}

/// `UserSchema`, `ImageSchema` and `LikeSchema` reference each other by
/// name, so they form cycles. `UserDetail` nests detail schemas by instance
/// and is acyclic.
pub fn registry(app: &app::Schema) -> Result<ser::Registry> {
    let user = app.model_by_name("User")?;
    let image = app.model_by_name("Image")?;
    let like = app.model_by_name("Like")?;

    let mut registry = ser::Registry::new();

    let user_schema = registry.register(
        ser::Schema::for_model("UserSchema", user)
            .extend("UserSchema")
            .nested_list("images", "ImageSchema")
            .nested_list("likes", "LikeSchema")
            .build(),
    );

    let image_schema = registry.register(
        ser::Schema::for_model("ImageSchema", image)
            .extend("ImageSchema")
            .nested("user", "UserSchema")
            // Not an attribute of `Image`.
            .nested_list("users_who_like", "UserSchema")
            .build(),
    );

    let like_schema = registry.register(
        ser::Schema::for_model("LikeSchema", like)
            .extend("LikeSchema")
            .nested("user", "UserSchema")
            .nested("image", "ImageSchema")
            .build(),
    );

    let image_detail = registry.register(
        image_schema
            .extend("ImageForUserDetail")
            .only(&["url"])
            .build(),
    );

    let like_detail = registry.register(
        like_schema
            .extend("LikeForUserDetail")
            .nested("image", &image_detail)
            .only(&["id", "image"])
            .build(),
    );

    registry.register(
        user_schema
            .extend("UserDetail")
            .nested_list("images", &image_detail)
            .nested_list("likes", &like_detail)
            .exclude(&["default_image"])
            .build(),
    );

    Ok(registry)
}

/// Two users with three images between them, each liking one of the other's
/// images.
pub fn store(app: Arc<app::Schema>) -> Result<Store> {
    let mut store = Store::new(app);

    store
        .insert("User", 1, json!({ "first_name": "a", "last_name": "b", "email": "c" }))?
        .insert("User", 2, json!({ "first_name": "d", "last_name": "e", "email": "f" }))?;

    store
        .insert(
            "Image",
            1,
            json!({
                "url": "images.example.com/receiver.jpg",
                "created_at": "2017-05-31T12:00:00Z",
                "is_default": true,
                "user_id": 1,
            }),
        )?
        .insert(
            "Image",
            2,
            json!({
                "url": "images.example.com/giver.jpg",
                "created_at": "2017-05-31T12:01:00Z",
                "is_default": true,
                "user_id": 2,
            }),
        )?
        .insert(
            "Image",
            3,
            json!({
                "url": "static.example.com/logo.png",
                "created_at": "2017-05-31T12:02:00Z",
                "is_default": false,
                "user_id": 2,
            }),
        )?;

    store
        .insert(
            "Like",
            1,
            json!({ "user_id": 1, "image_id": 2, "created_at": "2017-06-01T08:00:00Z" }),
        )?
        .insert(
            "Like",
            2,
            json!({ "user_id": 2, "image_id": 1, "created_at": "2017-06-01T08:05:00Z" }),
        )?;

    store
        .link("User", 1, "images", &[1])?
        .link("User", 1, "default_image", &[1])?
        .link("User", 1, "likes", &[1])?
        .link("User", 2, "images", &[2, 3])?
        .link("User", 2, "default_image", &[2])?
        .link("User", 2, "likes", &[2])?;

    store
        .link("Image", 1, "user", &[1])?
        .link("Image", 2, "user", &[2])?
        .link("Image", 3, "user", &[2])?;

    store
        .link("Like", 1, "user", &[1])?
        .link("Like", 1, "image", &[2])?
        .link("Like", 2, "user", &[2])?
        .link("Like", 2, "image", &[1])?;

    Ok(store)
}
