use diesel::prelude::*;
use diesel::result::Error as DieselError;
use crate::{
    models::lead_models::{Lead, NewLead},
    schema::leads,
    DbPool,
};

pub struct LeadRepository {
    pool: DbPool,
}

impl LeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_lead(&self, new_lead: NewLead) -> Result<(), DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        diesel::insert_into(leads::table)
            .values(&new_lead)
            .execute(&mut conn)?;
        Ok(())
    }

    /// All leads, newest submission first.
    pub fn get_all_leads(&self) -> Result<Vec<Lead>, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let result = leads::table
            .order(leads::created_at.desc())
            .load::<Lead>(&mut conn)?;
        Ok(result)
    }

    /// Returns false when no lead with that id existed.
    pub fn delete_lead(&self, lead_id: i32) -> Result<bool, DieselError> {
        let mut conn = self.pool.get().expect("Failed to get DB connection");
        let deleted = diesel::delete(leads::table.find(lead_id)).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}
