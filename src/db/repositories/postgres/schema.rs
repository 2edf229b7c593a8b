//! Diesel table definitions for the restaurant schema.

diesel::table! {
    restaurant (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    hours (id) {
        id -> Int8,
        restaurant_id -> Int8,
        day_of_week -> Varchar,
        open_time -> Time,
        close_time -> Time,
    }
}

diesel::table! {
    reservation (id) {
        id -> Int8,
        restaurant_id -> Int8,
        guest_name -> Varchar,
        party_size -> Int4,
        reserved_at -> Timestamp,
    }
}

diesel::joinable!(hours -> restaurant (restaurant_id));
diesel::joinable!(reservation -> restaurant (restaurant_id));

diesel::allow_tables_to_appear_in_same_query!(restaurant, hours, reservation);
