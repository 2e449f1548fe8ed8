//! 폴더 스캐너
//!
//! 폴더를 재귀적으로 훑어 이미지마다 평균 해시를 계산합니다.
//! 디렉토리 심볼릭 링크는 따라가지 않지만, 일반 파일을 가리키는 링크는 파일로 취급합니다.

use crate::models::hashed_image::HashedImage;
use crate::system::hasher::ImageHasher;
use crate::utils::error::{ComparerError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 진행률 보고 간격 (발견한 파일 수)
pub const DISCOVERY_INTERVAL: usize = 10;

/// 스캔 결과
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// 해시 계산에 성공한 이미지 (발견 순서)
    pub images: Vec<HashedImage>,
    /// 이미지로 읽을 수 없었던 파일
    pub invalid_paths: Vec<PathBuf>,
}

impl ScanOutcome {
    /// 발견한 전체 파일 수
    pub fn discovered(&self) -> usize {
        self.images.len() + self.invalid_paths.len()
    }
}

/// 폴더 스캐너
pub struct Scanner {
    hasher: ImageHasher,
}

impl Scanner {
    pub fn new(hasher: ImageHasher) -> Self {
        Self { hasher }
    }

    /// 모든 폴더가 존재하는 디렉토리인지 확인
    ///
    /// 첫 번째로 발견된 문제 경로에서 에러를 반환합니다.
    pub fn validate_folders(folders: &[PathBuf]) -> Result<()> {
        for folder in folders {
            if !folder.exists() {
                return Err(ComparerError::PathNotFound {
                    path: folder.clone(),
                });
            }
            if !folder.is_dir() {
                return Err(ComparerError::NotADirectory {
                    path: folder.clone(),
                });
            }
        }
        Ok(())
    }

    /// 폴더들을 재귀적으로 스캔
    #[cfg(test)]
    pub fn scan(&self, folders: &[PathBuf]) -> Result<ScanOutcome> {
        self.scan_with_progress(folders, |_| {})
    }

    /// 폴더들을 재귀적으로 스캔 (진행률 콜백 포함)
    ///
    /// `on_progress`는 파일 `DISCOVERY_INTERVAL`개를 발견할 때마다 누적 개수로 호출된다.
    /// 개별 파일 실패는 `invalid_paths`에 기록되고 스캔은 계속된다.
    pub fn scan_with_progress<F>(&self, folders: &[PathBuf], mut on_progress: F) -> Result<ScanOutcome>
    where
        F: FnMut(usize),
    {
        Self::validate_folders(folders)?;

        let mut outcome = ScanOutcome::default();
        for folder in folders {
            log::info!(
                "scanning {} (hash size {})",
                folder.display(),
                self.hasher.hash_size()
            );
            for entry in WalkDir::new(folder).follow_links(false) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        // 읽을 수 없는 하위 항목은 건너뜀
                        log::warn!("skipping unreadable entry: {}", err);
                        if let Some(path) = err.path() {
                            outcome.invalid_paths.push(path.to_path_buf());
                        }
                        continue;
                    }
                };
                if !Self::is_regular_file(&entry) {
                    continue;
                }

                self.process_file(entry.path(), &mut outcome);

                let discovered = outcome.discovered();
                if discovered % DISCOVERY_INTERVAL == 0 {
                    on_progress(discovered);
                }
            }
        }

        log::info!(
            "scan finished: {} images, {} invalid",
            outcome.images.len(),
            outcome.invalid_paths.len()
        );
        Ok(outcome)
    }

    /// 일반 파일이거나 일반 파일을 가리키는 심볼릭 링크인지
    fn is_regular_file(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    fn process_file(&self, path: &Path, outcome: &mut ScanOutcome) {
        // 삭제 스크립트에 그대로 옮길 수 없는 경로
        if path.to_str().is_none() {
            log::warn!("skipping non UTF-8 path: {}", path.display());
            outcome.invalid_paths.push(path.to_path_buf());
            return;
        }
        match self.hasher.hash_file(path) {
            Ok(image) => outcome.images.push(image),
            Err(err) => {
                log::debug!("not an image {}: {}", path.display(), err);
                outcome.invalid_paths.push(path.to_path_buf());
            }
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ImageHasher::default())
    }
}
