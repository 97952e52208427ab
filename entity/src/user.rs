use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    /// Bearer token presented by API clients. The identity provider that
    /// issues these tokens is external; this table only maps them to users.
    #[sea_orm(unique)]
    pub api_token: String,
    pub admin: bool,
    /// Set when the external identity-verification provider confirms the
    /// user's ID. Bidding requires this.
    pub id_verified_at: Option<DateTimeUtc>,
    /// Whether a payment method is on file. Bidding requires this.
    pub has_payment_method: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bid::Entity")]
    Bid,
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
}

impl Related<super::bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_id_verified(&self) -> bool {
        self.id_verified_at.is_some()
    }

    /// Bidding eligibility: verified identity AND a payment method on file.
    pub fn can_bid(&self) -> bool {
        self.is_id_verified() && self.has_payment_method
    }
}
