table! {
    attributes (id) {
        id -> Int4,
        attributes_group_id -> Int4,
        name -> Jsonb,
        slug -> Varchar,
        variant -> Varchar,
        options_group_id -> Nullable<Int4>,
        metric -> Nullable<Jsonb>,
        positioning_in_title -> Nullable<Jsonb>,
    }
}

table! {
    attributes_groups (id) {
        id -> Int4,
        name -> Jsonb,
    }
}

table! {
    options (id) {
        id -> Int4,
        options_group_id -> Int4,
        name -> Jsonb,
        slug -> Varchar,
        gender -> Nullable<Varchar>,
        variants -> Nullable<Jsonb>,
    }
}

table! {
    options_groups (id) {
        id -> Int4,
        name -> Jsonb,
    }
}

table! {
    product_attributes (id) {
        id -> Int4,
        product_id -> Int4,
        attribute_slug -> Varchar,
        value -> Array<Varchar>,
    }
}

table! {
    products (id) {
        id -> Int4,
        name -> Jsonb,
        card_name -> Nullable<Jsonb>,
        description -> Nullable<Jsonb>,
        slug -> Varchar,
        rubric_ids -> Array<Int4>,
        active -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    rubric_attributes_groups (id) {
        id -> Int4,
        rubric_id -> Int4,
        attributes_group_id -> Int4,
        show_in_catalogue_filter -> Bool,
    }
}

table! {
    rubrics (id) {
        id -> Int4,
        name -> Jsonb,
        slug -> Varchar,
        level -> Int4,
        parent_id -> Nullable<Int4>,
        catalogue_title -> Jsonb,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    shop_products (id) {
        id -> Int4,
        shop_id -> Int4,
        product_id -> Int4,
        available -> Int4,
        price -> Float8,
        old_prices -> Nullable<Jsonb>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    user_roles (id) {
        id -> Int4,
        user_id -> Int4,
        role -> Varchar,
    }
}

table! {
    view_counters (id) {
        id -> Int4,
        entity_kind -> Varchar,
        entity_id -> Int4,
        city -> Varchar,
        rubric_id -> Int4,
        attribute_id -> Int4,
        counter -> Int4,
    }
}

joinable!(attributes -> attributes_groups (attributes_group_id));
joinable!(options -> options_groups (options_group_id));
joinable!(product_attributes -> products (product_id));
joinable!(rubric_attributes_groups -> attributes_groups (attributes_group_id));
joinable!(rubric_attributes_groups -> rubrics (rubric_id));
joinable!(shop_products -> products (product_id));

allow_tables_to_appear_in_same_query!(
    attributes,
    attributes_groups,
    options,
    options_groups,
    product_attributes,
    products,
    rubric_attributes_groups,
    rubrics,
    shop_products,
    user_roles,
    view_counters,
);
