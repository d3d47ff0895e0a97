use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

// ==================== Event Payload Structs ====================
// Compact, typed payloads published to the Soroban event log. External
// observers (indexers, the arbitration service's UI) subscribe via the
// topic pattern ("GATE", symbol_short!("…")).

#[derive(Clone)]
#[contracttype]
pub struct MetaEvidenceEvent {
    /// Monotonic version of the dispute-policy description.
    pub meta_id: u64,
    /// External locator of the policy document.
    pub description: String,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct DisputeEvent {
    pub arbitrator: Address,
    pub dispute_id: u64,
    /// MetaEvidence version in force when the dispute was created.
    pub meta_evidence_id: u64,
    pub proposal_id: u64,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct EvidenceEvent {
    pub arbitrator: Address,
    pub dispute_id: u64,
    pub submitter: Address,
    /// Opaque content-addressed locator of the evidence body.
    pub evidence: String,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct RulingEvent {
    pub arbitrator: Address,
    pub dispute_id: u64,
    /// Raw wire ruling value as delivered by the arbitrator.
    pub ruling: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ExecutedEvent {
    pub proposal_id: u64,
    pub caller: Address,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipEvent {
    pub previous: Address,
    pub new: Address,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_meta_evidence(env: &Env, meta_id: u64, description: String) {
    env.events().publish(
        ("GATE", symbol_short!("META_EVD")),
        MetaEvidenceEvent {
            meta_id,
            description,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_dispute(
    env: &Env,
    arbitrator: Address,
    dispute_id: u64,
    meta_evidence_id: u64,
    proposal_id: u64,
) {
    env.events().publish(
        ("GATE", symbol_short!("DISPUTE")),
        DisputeEvent {
            arbitrator,
            dispute_id,
            meta_evidence_id,
            proposal_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_evidence(
    env: &Env,
    arbitrator: Address,
    dispute_id: u64,
    submitter: Address,
    evidence: String,
) {
    env.events().publish(
        ("GATE", symbol_short!("EVIDENCE")),
        EvidenceEvent {
            arbitrator,
            dispute_id,
            submitter,
            evidence,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_ruling(env: &Env, arbitrator: Address, dispute_id: u64, ruling: u32) {
    env.events().publish(
        ("GATE", symbol_short!("RULING")),
        RulingEvent {
            arbitrator,
            dispute_id,
            ruling,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_executed(env: &Env, proposal_id: u64, caller: Address) {
    env.events().publish(
        ("GATE", symbol_short!("EXECUTED")),
        ExecutedEvent {
            proposal_id,
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous: Address, new: Address) {
    env.events().publish(
        ("GATE", symbol_short!("OWNER")),
        OwnershipEvent {
            previous,
            new,
            timestamp: env.ledger().timestamp(),
        },
    );
}
