use diesel::prelude::*;
use serde::Serialize;
use crate::schema::leads;

#[derive(Queryable, Selectable, Serialize, Clone, Debug)]
#[diesel(table_name = leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i32, // Unix timestamp of submission
}

#[derive(Insertable)]
#[diesel(table_name = leads)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i32,
}
