use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    /// Caller lacks the required role: proposer-set membership,
    /// arbitration-service identity, or ownership.
    Unauthorized = 3,

    // --- Gating preconditions (4) ---
    /// Quorum evaluator returned a status outside the accepted set.
    InvalidProposalStatus = 4,

    // --- Dispute registry (5, 7–10) ---
    NoDisputeForProposal = 5,
    DuplicateDispute = 7,
    DuplicateRuling = 8,
    DisputeNotFound = 9,
    InvalidRuling = 10,

    // --- Forwarding (6) ---
    /// The call to the execution target did not succeed; the whole
    /// invocation aborts so no partial state survives.
    ExecutionFailed = 6,

    // --- Arithmetic (11) ---
    Overflow = 11,
}
