// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use super::fvm_shared_latest::sector::{
    PoStProof, RegisteredPoStProof, RegisteredSealProof, SectorInfo, SectorNumber, SectorSize,
    StoragePower,
};
use anyhow::bail;

/// Number of sectors challenged by a single Winning PoSt.
pub const WINNING_POST_SECTOR_COUNT: u64 = 1;

/// Maps the seal proof a sector was sealed with to the Winning PoSt proof used
/// to prove it.
pub fn registered_winning_post_proof(
    seal_proof: RegisteredSealProof,
) -> anyhow::Result<RegisteredPoStProof> {
    use RegisteredPoStProof as PoStProof;
    use RegisteredSealProof as SealProof;
    match seal_proof {
        SealProof::StackedDRG64GiBV1
        | SealProof::StackedDRG64GiBV1P1
        | SealProof::StackedDRG64GiBV1P1_Feat_SyntheticPoRep
        | SealProof::StackedDRG64GiBV1P2_Feat_NiPoRep => Ok(PoStProof::StackedDRGWinning64GiBV1),
        SealProof::StackedDRG32GiBV1
        | SealProof::StackedDRG32GiBV1P1
        | SealProof::StackedDRG32GiBV1P1_Feat_SyntheticPoRep
        | SealProof::StackedDRG32GiBV1P2_Feat_NiPoRep => Ok(PoStProof::StackedDRGWinning32GiBV1),
        SealProof::StackedDRG2KiBV1
        | SealProof::StackedDRG2KiBV1P1
        | SealProof::StackedDRG2KiBV1P1_Feat_SyntheticPoRep
        | SealProof::StackedDRG2KiBV1P2_Feat_NiPoRep => Ok(PoStProof::StackedDRGWinning2KiBV1),
        SealProof::StackedDRG8MiBV1
        | SealProof::StackedDRG8MiBV1P1
        | SealProof::StackedDRG8MiBV1P1_Feat_SyntheticPoRep
        | SealProof::StackedDRG8MiBV1P2_Feat_NiPoRep => Ok(PoStProof::StackedDRGWinning8MiBV1),
        SealProof::StackedDRG512MiBV1
        | SealProof::StackedDRG512MiBV1P1
        | SealProof::StackedDRG512MiBV1P1_Feat_SyntheticPoRep
        | SealProof::StackedDRG512MiBV1P2_Feat_NiPoRep => {
            Ok(PoStProof::StackedDRGWinning512MiBV1)
        }
        SealProof::Invalid(_) => bail!(
            "Unsupported mapping from {:?} to PoSt-winning RegisteredProof",
            seal_proof
        ),
    }
}

/// Number of sectors a Winning PoSt of the given type challenges.
pub fn winning_post_sector_count(post_proof: RegisteredPoStProof) -> anyhow::Result<u64> {
    use RegisteredPoStProof as PoStProof;
    match post_proof {
        PoStProof::StackedDRGWinning2KiBV1
        | PoStProof::StackedDRGWinning8MiBV1
        | PoStProof::StackedDRGWinning512MiBV1
        | PoStProof::StackedDRGWinning32GiBV1
        | PoStProof::StackedDRGWinning64GiBV1 => Ok(WINNING_POST_SECTOR_COUNT),
        other => bail!("{other:?} is not a Winning PoSt proof"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_to_winning_post_mapping() {
        assert_eq!(
            registered_winning_post_proof(RegisteredSealProof::StackedDRG32GiBV1P1).unwrap(),
            RegisteredPoStProof::StackedDRGWinning32GiBV1
        );
        assert_eq!(
            registered_winning_post_proof(RegisteredSealProof::StackedDRG2KiBV1).unwrap(),
            RegisteredPoStProof::StackedDRGWinning2KiBV1
        );
        assert!(registered_winning_post_proof(RegisteredSealProof::Invalid(42)).is_err());
    }

    #[test]
    fn window_post_has_no_winning_sector_count() {
        assert_eq!(
            winning_post_sector_count(RegisteredPoStProof::StackedDRGWinning64GiBV1).unwrap(),
            1
        );
        assert!(
            winning_post_sector_count(RegisteredPoStProof::StackedDRGWindow32GiBV1P1).is_err()
        );
    }

    #[test]
    fn numeric_ids_match_lotus() {
        let seal: i64 = RegisteredSealProof::StackedDRG32GiBV1P1.into();
        assert_eq!(seal, 8);
        let post: i64 = RegisteredPoStProof::StackedDRGWinning32GiBV1.into();
        assert_eq!(post, 3);
    }
}
