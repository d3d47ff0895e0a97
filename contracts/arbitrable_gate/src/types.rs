use soroban_sdk::{contracttype, Address, Bytes};

// ==================== Wire Constants ====================

/// Number of ruling choices requested from the arbitration service.
/// Binary accept/reject; 0 is reserved by the arbitrator for refuse-to-rule.
pub const DISPUTE_CHOICES: u32 = 2;

/// Wire ruling value: arbitrator refused to rule / jurors tied.
pub const RULING_REFUSED: u32 = 0;
/// Wire ruling value: proposal upheld, execution allowed.
pub const RULING_APPROVE: u32 = 1;
/// Wire ruling value: proposal struck down.
pub const RULING_REJECT: u32 = 2;

// ==================== Proposal Status ====================

/// Status values returned by the external quorum evaluator.
/// Only `Accepted` and `AcceptedDuringVoting` permit gating to proceed;
/// the remaining values exist to interpret the evaluator's full range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
#[repr(u32)]
pub enum ProposalStatus {
    Voting = 0,
    Rejected = 1,
    Accepted = 2,
    AcceptedDuringVoting = 3,
}

// ==================== Ruling ====================

/// Terminal outcome of a dispute as recorded in the registry.
/// Write-once: `Unset` transitions to exactly one of the other values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
pub enum Ruling {
    /// Dispute created, arbitrator has not ruled yet.
    Unset,
    /// Arbitrator upheld the proposal; execution is unblocked.
    Approved,
    /// Arbitrator rejected the proposal or refused to rule / tied.
    /// The proposal can never be forwarded.
    Rejected,
}

// ==================== Dispute Record ====================

/// Persistent record linking a proposal to its (at most one) dispute.
/// Keyed canonically by `proposal_id`; `dispute_id` is mirrored into a
/// secondary index so ruling callbacks can be authenticated. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct DisputeRecord {
    pub proposal_id: u64,
    /// Identifier assigned by the arbitration service.
    pub dispute_id: u64,
    pub disputed: bool,
    pub ruling: Ruling,
    /// Ledger sequence at which the dispute was created.
    pub created_ledger: u32,
}

// ==================== Gate State ====================

/// Fresh classification of a proposal's position in the gate.
/// Never persisted; recomputed on every query.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
pub enum GateState {
    /// Undisputed and the disputable window has not elapsed.
    WindowOpen,
    /// Undisputed and the window has elapsed; executable.
    WindowElapsed,
    /// Dispute exists, ruling pending; blocked.
    DisputedPending,
    /// Ruled in favour; executable.
    DisputedApproved,
    /// Ruled against; permanently blocked.
    DisputedRejected,
    /// Payload already forwarded once.
    Executed,
}

// ==================== Configuration ====================

/// Immutable configuration written once at initialization.
/// The owner lives in its own storage slot because ownership transfer is
/// the single permitted post-init mutation.
#[derive(Clone, Debug)]
#[contracttype]
pub struct GateConfig {
    /// Contract ultimately receiving forwarded payloads.
    pub execution_target: Address,
    /// External whitelist contract answering `is_member(Address) -> bool`.
    pub proposer_registry: Address,
    /// External evaluator answering `proposal_status(...) -> u32`.
    pub quorum: Address,
    /// Quorum threshold in basis points, passed through to the evaluator.
    pub quorum_bps: u32,
    /// The arbitration service; sole identity allowed to call `rule`.
    pub arbitrator: Address,
    /// Opaque blob forwarded verbatim on dispute creation.
    pub arbitration_extra_data: Bytes,
    /// Disputable-window length in ledgers after proposal start.
    pub window_ledgers: u32,
}
