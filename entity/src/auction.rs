use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auctions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Exactly one auction per vehicle.
    #[sea_orm(unique)]
    pub vehicle_id: i32,
    pub auction_type: AuctionType,
    pub status: AuctionStatus,
    pub starts_at: DateTimeUtc,
    pub ends_at: DateTimeUtc,
    /// Number of anti-snipe extensions applied so far.
    pub extended_count: i16,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub current_bid: Decimal,
    /// Doubles as the optimistic-concurrency version for bid recording:
    /// every accepted bid increments it, and the conditional update that
    /// records a bid is keyed on the value the validator observed.
    pub bid_count: i32,
    pub current_bid_user_id: Option<i32>,
    /// Set only when the auction transitions to `ended` with at least one bid.
    pub winner_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AuctionType {
    #[sea_orm(string_value = "timed")]
    Timed,
    #[sea_orm(string_value = "live")]
    Live,
    #[sea_orm(string_value = "buy_now_only")]
    BuyNowOnly,
    #[sea_orm(string_value = "make_offer")]
    MakeOffer,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum AuctionStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "ended")]
    Ended,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
    #[sea_orm(has_many = "super::bid::Entity")]
    Bid,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Bid acceptance is defined by this condition, not by the status flag
    /// alone: an active auction past its end time must be closed before any
    /// further bids are accepted.
    pub fn is_active(&self, now: DateTimeUtc) -> bool {
        self.status == AuctionStatus::Active && self.starts_at <= now && now <= self.ends_at
    }

    pub fn time_remaining(&self, now: DateTimeUtc) -> i64 {
        if !self.is_active(now) {
            return 0;
        }
        (self.ends_at - now).num_seconds().max(0)
    }
}
