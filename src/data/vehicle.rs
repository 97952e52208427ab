use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use entity::vehicle::VehicleStatus;

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a vehicle by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Marks a vehicle as sold once an order exists for it
    pub async fn mark_sold(&self, id: i32) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Vehicle {} not found", id)))?;

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.status = ActiveValue::Set(VehicleStatus::Sold);

        active_model.update(self.db).await
    }
}
