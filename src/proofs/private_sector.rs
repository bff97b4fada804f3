// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::{Path, PathBuf};

use super::Error;
use crate::shim::address::ActorID;
use crate::shim::sector::{RegisteredPoStProof, SectorInfo, SectorNumber};

/// A challenged sector together with the local files needed to prove it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateSectorInfo {
    pub info: SectorInfo,
    pub post_proof: RegisteredPoStProof,
    pub cache_dir: PathBuf,
    pub sealed_path: PathBuf,
}

/// Sealed sectors on local disk, laid out the way a storage worker keeps them:
///
/// ```text
/// {root}/sealed/s-t0{miner}-{number}
/// {root}/cache/s-t0{miner}-{number}/
/// ```
#[derive(Clone, Debug)]
pub struct LocalSectorStore {
    root: PathBuf,
}

impl LocalSectorStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sector_name(miner: ActorID, number: SectorNumber) -> String {
        format!("s-t0{miner}-{number}")
    }

    pub fn sealed_path(&self, miner: ActorID, number: SectorNumber) -> PathBuf {
        self.root
            .join("sealed")
            .join(Self::sector_name(miner, number))
    }

    pub fn cache_dir(&self, miner: ActorID, number: SectorNumber) -> PathBuf {
        self.root
            .join("cache")
            .join(Self::sector_name(miner, number))
    }

    /// Locates the replica of `sector`, failing if its sealed file or cache
    /// directory is missing.
    pub fn resolve(
        &self,
        miner: ActorID,
        post_proof: RegisteredPoStProof,
        sector: &SectorInfo,
    ) -> Result<PrivateSectorInfo, Error> {
        let sealed_path = self.sealed_path(miner, sector.sector_number);
        if !sealed_path.is_file() {
            return Err(Error::SectorUnavailable {
                sector: sector.sector_number,
                path: sealed_path,
            });
        }
        let cache_dir = self.cache_dir(miner, sector.sector_number);
        if !cache_dir.is_dir() {
            return Err(Error::SectorUnavailable {
                sector: sector.sector_number,
                path: cache_dir,
            });
        }
        Ok(PrivateSectorInfo {
            info: sector.clone(),
            post_proof,
            cache_dir,
            sealed_path,
        })
    }
}

#[cfg(test)]
pub(crate) fn create_sector_files(store: &LocalSectorStore, miner: ActorID, number: SectorNumber) {
    let sealed = store.sealed_path(miner, number);
    std::fs::create_dir_all(sealed.parent().unwrap()).unwrap();
    std::fs::write(sealed, b"replica").unwrap();
    std::fs::create_dir_all(store.cache_dir(miner, number)).unwrap();
}
