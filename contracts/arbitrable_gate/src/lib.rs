#![no_std]
#![allow(clippy::too_many_arguments)]


mod errors;
mod events;
mod types;

pub use errors::Error;
pub use types::{
    DisputeRecord, GateConfig, GateState, ProposalStatus, Ruling, DISPUTE_CHOICES,
    RULING_APPROVE, RULING_REFUSED, RULING_REJECT,
};

use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, Bytes, Env, IntoVal, String, Symbol, Val,
};

// ==================== Storage Keys ====================

#[contracttype]
pub enum DataKey {
    // Lifecycle / configuration — instance storage
    Config,
    Owner,
    MetaCount, // u64 — monotonic MetaEvidence version

    // Dispute registry — persistent
    Dispute(u64),         // proposal_id → DisputeRecord (canonical)
    DisputeProposal(u64), // dispute_id → proposal_id (ruling-callback auth only)

    // Exactly-once forwarding — persistent
    Executed(u64), // proposal_id → bool
}

// ==================== Contract ====================

#[contract]
pub struct ArbitrableGate;

#[contractimpl]
impl ArbitrableGate {
    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initialise the gate. Must be called exactly once.
    /// Emits the version-0 MetaEvidence event anchoring the dispute policy.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: GateConfig,
        meta_evidence: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::MetaCount, &0u64);

        events::emit_meta_evidence(&env, 0, meta_evidence);
        Ok(())
    }

    /// Hand ownership to `new_owner`. The only permitted configuration
    /// mutation after initialization.
    pub fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        events::emit_ownership_transferred(&env, owner, new_owner);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Execution Gate
    // ------------------------------------------------------------------

    /// Attempt to forward `payload` to the execution target for an accepted
    /// proposal. Returns `Ok(true)` when the payload was forwarded and
    /// `Ok(false)` when gating legitimately declined (window still open,
    /// ruling pending, permanently blocked, or already executed) — a no-op,
    /// not a fault.
    pub fn execute(
        env: Env,
        caller: Address,
        proposal_id: u64,
        start_ledger: u32,
        votes_for: i128,
        votes_against: i128,
        votes_abstain: i128,
        payload: Bytes,
    ) -> Result<bool, Error> {
        let cfg = Self::load_config(&env)?;
        caller.require_auth();
        if !Self::is_proposer(&env, &cfg, &caller) {
            return Err(Error::Unauthorized);
        }

        let status = Self::proposal_status(
            &env,
            &cfg,
            proposal_id,
            start_ledger,
            votes_for,
            votes_against,
            votes_abstain,
        );
        if status != ProposalStatus::Accepted as u32
            && status != ProposalStatus::AcceptedDuringVoting as u32
        {
            return Err(Error::InvalidProposalStatus);
        }

        if Self::read_executed(&env, proposal_id) {
            return Ok(false);
        }
        if !Self::may_forward(&env, &cfg, proposal_id, start_ledger)? {
            return Ok(false);
        }

        // Marker first: an Err return aborts the invocation, so a failed
        // forward rolls this back with everything else.
        env.storage()
            .persistent()
            .set(&DataKey::Executed(proposal_id), &true);
        Self::forward(&env, &cfg, proposal_id, payload)?;

        events::emit_executed(&env, proposal_id, caller);
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Dispute Registry
    // ------------------------------------------------------------------

    /// Escalate a proposal to the arbitration service. `fee` is the
    /// arbitration cost the challenger authorizes the arbitrator to
    /// collect. Returns the dispute identifier assigned by the arbitrator.
    pub fn create_dispute(
        env: Env,
        challenger: Address,
        proposal_id: u64,
        fee: i128,
    ) -> Result<u64, Error> {
        let cfg = Self::load_config(&env)?;
        challenger.require_auth();

        if env
            .storage()
            .persistent()
            .has(&DataKey::Dispute(proposal_id))
        {
            return Err(Error::DuplicateDispute);
        }

        let dispute_id: u64 = env.invoke_contract(
            &cfg.arbitrator,
            &Symbol::new(&env, "create_dispute"),
            vec![
                &env,
                challenger.into_val(&env),
                fee.into_val(&env),
                DISPUTE_CHOICES.into_val(&env),
                cfg.arbitration_extra_data.into_val(&env),
            ],
        );

        let record = DisputeRecord {
            proposal_id,
            dispute_id,
            disputed: true,
            ruling: Ruling::Unset,
            created_ledger: env.ledger().sequence(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Dispute(proposal_id), &record);
        env.storage()
            .persistent()
            .set(&DataKey::DisputeProposal(dispute_id), &proposal_id);

        events::emit_dispute(
            &env,
            cfg.arbitrator,
            dispute_id,
            Self::read_meta_count(&env),
            proposal_id,
        );
        Ok(dispute_id)
    }

    /// Ruling callback from the arbitration service. Persists the ruling
    /// into the canonical record exactly once; the gate reads it on the
    /// next `execute`.
    pub fn rule(env: Env, arbitrator: Address, dispute_id: u64, ruling: u32) -> Result<(), Error> {
        let cfg = Self::load_config(&env)?;
        arbitrator.require_auth();
        if arbitrator != cfg.arbitrator {
            return Err(Error::Unauthorized);
        }
        if ruling > RULING_REJECT {
            return Err(Error::InvalidRuling);
        }

        let proposal_id: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::DisputeProposal(dispute_id))
            .ok_or(Error::DisputeNotFound)?;
        let mut record: DisputeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Dispute(proposal_id))
            .ok_or(Error::DisputeNotFound)?;

        if record.ruling != Ruling::Unset {
            return Err(Error::DuplicateRuling);
        }

        record.ruling = if ruling == RULING_APPROVE {
            Ruling::Approved
        } else {
            // Reject and refuse-to-rule/tied are both terminal blocks.
            Ruling::Rejected
        };
        env.storage()
            .persistent()
            .set(&DataKey::Dispute(proposal_id), &record);

        events::emit_ruling(&env, arbitrator, dispute_id, ruling);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Evidence Channel
    // ------------------------------------------------------------------

    /// Relay an evidence reference for a disputed proposal. Any party may
    /// submit; nothing is stored — evidence lives in the event stream.
    pub fn submit_evidence(
        env: Env,
        submitter: Address,
        proposal_id: u64,
        evidence: String,
    ) -> Result<(), Error> {
        let cfg = Self::load_config(&env)?;
        submitter.require_auth();

        let record: DisputeRecord = env
            .storage()
            .persistent()
            .get(&DataKey::Dispute(proposal_id))
            .ok_or(Error::NoDisputeForProposal)?;

        events::emit_evidence(&env, cfg.arbitrator, record.dispute_id, submitter, evidence);
        Ok(())
    }

    // ------------------------------------------------------------------
    // MetaEvidence Versioning
    // ------------------------------------------------------------------

    /// Re-anchor the dispute policy under the next MetaEvidence version.
    /// Owner only. Returns the new version.
    pub fn set_meta_evidence(env: Env, owner: Address, description: String) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        Self::require_owner(&env, &owner)?;

        let id = Self::read_meta_count(&env)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::MetaCount, &id);

        events::emit_meta_evidence(&env, id, description);
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_config(env: Env) -> Result<GateConfig, Error> {
        Self::load_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Canonical dispute lookup, `None` if the proposal was never disputed.
    pub fn get_dispute(env: Env, proposal_id: u64) -> Option<DisputeRecord> {
        env.storage().persistent().get(&DataKey::Dispute(proposal_id))
    }

    /// Secondary-index lookup used by observers to resolve a dispute back
    /// to its proposal.
    pub fn dispute_proposal(env: Env, dispute_id: u64) -> Option<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::DisputeProposal(dispute_id))
    }

    pub fn meta_evidence_id(env: Env) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Ok(Self::read_meta_count(&env))
    }

    pub fn is_executed(env: Env, proposal_id: u64) -> bool {
        Self::read_executed(&env, proposal_id)
    }

    /// Classify where a proposal currently sits in the gate. Evaluated
    /// fresh on every call; quorum status is not consulted here.
    pub fn gate_state(env: Env, proposal_id: u64, start_ledger: u32) -> Result<GateState, Error> {
        let cfg = Self::load_config(&env)?;

        if Self::read_executed(&env, proposal_id) {
            return Ok(GateState::Executed);
        }
        let record: Option<DisputeRecord> =
            env.storage().persistent().get(&DataKey::Dispute(proposal_id));
        match record {
            Some(r) => Ok(match r.ruling {
                Ruling::Unset => GateState::DisputedPending,
                Ruling::Approved => GateState::DisputedApproved,
                Ruling::Rejected => GateState::DisputedRejected,
            }),
            None => {
                if Self::window_elapsed(&env, &cfg, start_ledger)? {
                    Ok(GateState::WindowElapsed)
                } else {
                    Ok(GateState::WindowOpen)
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Config) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        if owner != *caller {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn load_config(env: &Env) -> Result<GateConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    fn read_meta_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::MetaCount)
            .unwrap_or(0u64)
    }

    fn read_executed(env: &Env, proposal_id: u64) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Executed(proposal_id))
            .unwrap_or(false)
    }

    /// Gating decision for an accepted, not-yet-executed proposal.
    /// `Ok(true)` = forward now; `Ok(false)` = legitimate no-op.
    fn may_forward(
        env: &Env,
        cfg: &GateConfig,
        proposal_id: u64,
        start_ledger: u32,
    ) -> Result<bool, Error> {
        let record: Option<DisputeRecord> =
            env.storage().persistent().get(&DataKey::Dispute(proposal_id));
        match record {
            // Undisputed: executable once the challenge window has elapsed.
            None => Self::window_elapsed(env, cfg, start_ledger),
            Some(r) => Ok(match r.ruling {
                Ruling::Unset => false,
                Ruling::Approved => true,
                Ruling::Rejected => false,
            }),
        }
    }

    fn window_elapsed(env: &Env, cfg: &GateConfig, start_ledger: u32) -> Result<bool, Error> {
        let deadline = start_ledger
            .checked_add(cfg.window_ledgers)
            .ok_or(Error::Overflow)?;
        Ok(env.ledger().sequence() >= deadline)
    }

    fn is_proposer(env: &Env, cfg: &GateConfig, caller: &Address) -> bool {
        env.invoke_contract(
            &cfg.proposer_registry,
            &Symbol::new(env, "is_member"),
            vec![env, caller.into_val(env)],
        )
    }

    fn proposal_status(
        env: &Env,
        cfg: &GateConfig,
        proposal_id: u64,
        start_ledger: u32,
        votes_for: i128,
        votes_against: i128,
        votes_abstain: i128,
    ) -> u32 {
        env.invoke_contract(
            &cfg.quorum,
            &Symbol::new(env, "proposal_status"),
            vec![
                env,
                proposal_id.into_val(env),
                start_ledger.into_val(env),
                votes_for.into_val(env),
                votes_against.into_val(env),
                votes_abstain.into_val(env),
                cfg.quorum_bps.into_val(env),
            ],
        )
    }

    /// Forward `payload` verbatim to the execution target. Any failure in
    /// the target aborts the whole invocation as `ExecutionFailed`.
    fn forward(env: &Env, cfg: &GateConfig, proposal_id: u64, payload: Bytes) -> Result<(), Error> {
        let result = env.try_invoke_contract::<Val, soroban_sdk::Error>(
            &cfg.execution_target,
            &Symbol::new(env, "execute"),
            vec![env, proposal_id.into_val(env), payload.into_val(env)],
        );
        match result {
            Ok(Ok(_)) => Ok(()),
            _ => Err(Error::ExecutionFailed),
        }
    }
}
