use anyhow::Context;
use serde::Deserialize;
use std::fs;

/// Custom error declarations of the proof-market contracts, in the order
/// they appear in the Solidity sources. Duplicates, if any, are kept.
pub const ERROR_SIGNATURES: &[&str] = &[
    "OnlyAdminCanCall()",
    "CannotBeAdminLess()",
    "CannotBeZero()",
    "CannotBeSlashed()",
    "InsufficientStakeToLock()",
    "EnclaveKeyNotVerified()",
    "ExceedsAcceptableRange()",
    "InvalidContractAddress()",
    "CannotUseMatchingEngineRole()",
    "InvalidEnclaveSignature(address)",
    "IncorrectImageId()",
    "AttestationTimeout()",
    "InvalidECIESACL()",
    "BlacklistedImage(bytes32)",
    "AlreadyABlacklistedImage(bytes32)",
    "MustBeAnEnclave(bytes32)",
    "FailedWhitelistingImages(bytes32)",
    "FailedAddingToFamily(bytes32,bytes32)",
    "InferredImageIdIsDifferent()",
    "ImageAlreadyInFamily(bytes32,bytes32)",
    "GeneratorAlreadyExists()",
    "InvalidGenerator()",
    "CannotLeaveWithActiveMarket()",
    "AssignOnlyToIdleGenerators()",
    "InsufficientGeneratorComputeAvailable()",
    "OnlyWorkingGenerators()",
    "InvalidEnclaveKey()",
    "OnlyValidGeneratorsCanRequestExit()",
    "InvalidGeneratorStatePerMarket()",
    "UnstakeRequestNotInPlace()",
    "ReduceComputeRequestNotInPlace()",
    "MaxParallelRequestsPerMarketExceeded()",
    "KeyAlreadyExists(address)",
    "ReductionRequestNotValid()",
    "PublicMarketsDontNeedKey()",
    "CannotModifyImagesForPublicMarkets()",
    "InvalidMarket()",
    "AlreadyJoinedMarket()",
    "CannotBeMoreThanDeclaredCompute()",
    "CannotLeaveMarketWithActiveRequest()",
    "MarketAlreadyExists()",
    "InactiveMarket()",
    "OnlyMarketCreator()",
    "CannotRemoveDefaultImageFromMarket(uint256,bytes32)",
    "CannotAssignExpiredTasks()",
    "InvalidInputs()",
    "ArityMismatch()",
    "OnlyMatchingEngineCanAssign()",
    "RequestAlreadyInPlace()",
    "CannotSlashUsingValidInputs(uint256)",
    "ShouldBeInCreateState()",
    "ProofPriceMismatch(uint256)",
    "ProofTimeMismatch(uint256)",
    "OnlyExpiredAsksCanBeCancelled(uint256)",
    "OnlyAssignedAsksCanBeProved(uint256)",
    "InvalidProof(uint256)",
    "ShouldBeInCrossedDeadlineState(uint256)",
    "ShouldBeInAssignedState(uint256)",
    "OnlyGeneratorCanDiscardRequest(uint256)",
];

/// On-disk signature list, same shape as the files under `data/`.
#[derive(Debug, Deserialize)]
pub struct SignatureFile {
    pub signatures: Vec<String>,
}

impl SignatureFile {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read signature file {path}"))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse signature file {path}"))
    }
}
