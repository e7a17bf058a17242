use shared_utils::TimeWindow;
use soroban_sdk::{contracttype, Address};

/// A single presale, keyed by its sale asset
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Presale {
    pub sale_asset: Address,
    pub payment_asset: Address,
    pub creator: Address,
    /// Payment units per sale unit, 18-decimal fixed point
    pub rate: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub hard_cap: i128,
    pub total_raised: i128,
    pub total_allocated: i128,
    pub sale_tokens_funded: i128,
    pub tokens_claimed: i128,
    pub unsold_withdrawn: i128,
    pub settled: bool,
    pub withdrawn: bool,
    pub created_at: u64,
    pub ended_at: u64,
    /// Distinct contributors, the length of the `ContributorAt` index
    pub contributor_count: u32,
}

impl Presale {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Lifecycle phase as seen at `now`
    pub fn status(&self, now: u64) -> PresaleStatus {
        if self.withdrawn {
            PresaleStatus::Withdrawn
        } else if self.settled {
            PresaleStatus::Ended
        } else if self.window().is_before(now) {
            PresaleStatus::Upcoming
        } else if self.window().is_after(now) {
            PresaleStatus::AwaitingSettlement
        } else {
            PresaleStatus::Active
        }
    }

    pub fn remaining_capacity(&self) -> i128 {
        self.hard_cap - self.total_raised
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresaleStatus {
    /// Created, window not open yet
    Upcoming,
    /// Accepting contributions
    Active,
    /// Window closed, `end_presale` not called yet
    AwaitingSettlement,
    /// Settled, raise not yet withdrawn
    Ended,
    /// Settled and raise paid to the creator
    Withdrawn,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Presale record (sale_asset -> Presale)
    Presale(Address),
    /// Creation-order index (position -> sale_asset)
    PresaleAt(u32),
    /// Number of presales ever created
    PresaleCount,
    /// Cumulative payment by a contributor (sale_asset, contributor) -> i128
    Contribution(Address, Address),
    /// Cumulative sale-asset allocation (sale_asset, contributor) -> i128
    Allocation(Address, Address),
    /// Allocation already delivered (sale_asset, contributor) -> bool
    Claimed(Address, Address),
    /// Contributor index in first-contribution order (sale_asset, position) -> Address
    ContributorAt(Address, u32),
}
