//! Code for creating the user table and inserting users.

use rusqlite::Connection;

use crate::{Error, password::PasswordHash};

/// A user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// A UUID, unique across users.
    pub id: String,
    pub name: String,
    /// Unique across users.
    pub email: String,
    pub password_hash: PasswordHash,
}

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Insert `user` unless a user with the same ID already exists.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred, e.g. another
/// user already has the same email.
pub fn upsert_user(user: &User, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO user (id, name, email, password) VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(id) DO NOTHING",
        (
            &user.id,
            &user.name,
            &user.email,
            user.password_hash.as_ref(),
        ),
    )?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn get_user_by_email(email: &str, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, name, email, password FROM user WHERE email = :email")?
        .query_row(&[(":email", email)], |row| {
            let raw_password_hash: String = row.get(3)?;

            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password_hash: PasswordHash::new_unchecked(&raw_password_hash),
            })
        })
        .map_err(|error| error.into())
}
