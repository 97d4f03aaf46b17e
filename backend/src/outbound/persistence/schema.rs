//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Credential store. `username` and `email` carry unique indexes.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        /// `user` or `admin`.
        role -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Accommodation requests. Only `approved` rows reserve their interval.
    bookings (id) {
        id -> Uuid,
        full_name -> Text,
        email -> Text,
        phone -> Text,
        start_date -> Date,
        end_date -> Date,
        number_of_people -> Int4,
        purpose -> Text,
        status -> Varchar,
        notes -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    activities (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        date -> Date,
        time -> Text,
        location -> Text,
        image_url -> Text,
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    gallery_items (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        image_url -> Text,
        category -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, bookings, activities, gallery_items);
