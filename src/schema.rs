diesel::table! {
    colleges (name) {
        name -> Text,
        location -> Nullable<Text>,
        accommodations -> Nullable<Text>,
        resources -> Nullable<Text>,
    }
}

diesel::table! {
    reviews (id) {
        id -> Integer,
        college_name -> Text,
        identities_list -> Text,
        race -> Text,
        disability_identity -> Text,
        gender -> Text,
        sexual_orientation -> Text,
        optin -> Text,
        lgbtq_id -> Text,
        lgbtq_safety -> Nullable<Integer>,
        exclusionary -> Text,
        friendly -> Text,
        accommodations_difficulty -> Nullable<Integer>,
        reliability_rating -> Nullable<Integer>,
        timeliness -> Text,
        accommodation_rating -> Nullable<Integer>,
        mobility -> Text,
        outside_rating -> Nullable<Integer>,
        inside_accessibility -> Nullable<Integer>,
        liberal_rating -> Nullable<Integer>,
        diversity_rating -> Nullable<Integer>,
        tolerance_rating -> Nullable<Integer>,
        supportive_rating -> Nullable<Integer>,
        clubs_rating -> Nullable<Integer>,
        overall_access_rating -> Nullable<Integer>,
        overall_identity_rating -> Nullable<Integer>,
        general_review -> Text,
        identity_review -> Text,
    }
}
