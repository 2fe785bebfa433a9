table! {
    loans (id) {
        id -> Integer,
        user_id -> Integer,
        amount -> Double,
        interest_rate -> Double,
        duration -> Integer,
        status -> Text,
        remaining_balance -> Double,
    }
}

table! {
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        age -> Integer,
        income -> Double,
        employment_years -> Integer,
        credit_score -> Integer,
    }
}

joinable!(loans -> users (user_id));

allow_tables_to_appear_in_same_query!(
    loans,
    users,
);
