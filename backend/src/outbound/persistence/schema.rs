//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the schema, regenerate them with `diesel print-schema`
//! or update them by hand.

diesel::table! {
    /// Registered users with their enriched postal address flattened into
    /// columns.
    users (id) {
        id -> Int8,
        name -> Text,
        age -> Int4,
        document_number -> Text,
        email -> Text,
        phone -> Text,
        zip_code -> Text,
        country -> Text,
        state -> Text,
        city -> Text,
        neighborhood -> Text,
        street -> Text,
        number -> Text,
        complement -> Text,
    }
}

diesel::table! {
    /// Posts. `user_id` references `users`.
    posts (id) {
        id -> Int8,
        user_id -> Int8,
        /// Stamped on create and on every edit.
        created_at -> Timestamptz,
        title -> Text,
        content -> Text,
    }
}

diesel::table! {
    /// Comments. `post_id` references `posts`, `user_id` references `users`.
    comments (id) {
        id -> Int8,
        post_id -> Int8,
        user_id -> Int8,
        created_at -> Timestamptz,
        content -> Text,
    }
}

diesel::table! {
    /// Follow edges. Unique per ordered pair; `id` records insertion order.
    connections (id) {
        id -> Int8,
        follower_id -> Int8,
        following_id -> Int8,
    }
}

diesel::joinable!(posts -> users (user_id));
diesel::joinable!(comments -> posts (post_id));

diesel::allow_tables_to_appear_in_same_query!(users, posts, comments, connections);
