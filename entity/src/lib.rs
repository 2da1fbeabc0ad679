pub mod user;
pub mod auth_token;

/*
 One user row per account, keyed by email (login identifier) and an optional phone number.
 A user holds at most one auth token; logging in again replaces it.
 Only the argon2 hash of the token secret is kept, same as for passwords.
 */
