//! 유사 이미지 그룹화
//!
//! 모든 이미지 쌍의 해시 거리를 비교하고, 임계값 이내인 이미지끼리 묶습니다.
//! 같은 구성원으로 이루어진 그룹은 한 번만 만들어집니다.

use crate::models::hashed_image::HashedImage;
use crate::models::similarity_group::SimilarityGroup;
use std::collections::HashSet;
use std::path::PathBuf;

/// 진행률 보고 간격 (비교한 이미지 수)
pub const PROGRESS_INTERVAL: usize = 10;

/// 유사 이미지 그룹 찾기
#[cfg(test)]
pub fn find_similar_groups(images: &[HashedImage], threshold: u32) -> Vec<SimilarityGroup> {
    find_similar_groups_with_progress(images, threshold, |_| {})
}

/// 유사 이미지 그룹 찾기 (진행률 콜백 포함)
///
/// `on_progress`는 이미지 `PROGRESS_INTERVAL`개를 비교할 때마다 누적 개수로 호출된다.
pub fn find_similar_groups_with_progress<F>(
    images: &[HashedImage],
    threshold: u32,
    mut on_progress: F,
) -> Vec<SimilarityGroup>
where
    F: FnMut(usize),
{
    let mut groups = Vec::new();
    let mut emitted: HashSet<Vec<PathBuf>> = HashSet::new();

    for (i, anchor) in images.iter().enumerate() {
        let similar: Vec<(HashedImage, u32)> = images
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(_, other)| {
                let distance = anchor.distance(other);
                (distance <= threshold).then(|| (other.clone(), distance))
            })
            .collect();

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            on_progress(i + 1);
        }

        if similar.is_empty() {
            continue;
        }

        let group = SimilarityGroup::new(anchor.clone(), similar);
        if emitted.insert(group.membership_key()) {
            groups.push(group);
        }
    }

    log::info!(
        "compared {} images, {} similarity groups (threshold {})",
        images.len(),
        groups.len(),
        threshold
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hashed_image::ImageHash;
    use std::time::SystemTime;

    fn image(path: &str, bits: &[bool]) -> HashedImage {
        HashedImage::new(
            PathBuf::from(path),
            (10, 10),
            0,
            SystemTime::now(),
            ImageHash::from_bits(bits.iter().copied()),
        )
    }

    #[test]
    fn test_unique_images_produce_no_groups() {
        let images = vec![
            image("/a.png", &[true, true, true, true]),
            image("/b.png", &[false, false, false, false]),
        ];
        assert!(find_similar_groups(&images, 1).is_empty());
    }

    #[test]
    fn test_mutually_similar_set_emitted_once() {
        let images = vec![
            image("/a.png", &[true, true, false, false]),
            image("/b.png", &[true, true, false, false]),
            image("/c.png", &[true, true, true, false]),
        ];
        let groups = find_similar_groups(&images, 1);

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.original.path, PathBuf::from("/a.png"));
        assert_eq!(group.similar.len(), 2);
        assert_eq!(group.similar[0].1, 0);
        assert_eq!(group.similar[1].1, 1);
    }

    #[test]
    fn test_chain_produces_distinct_groups() {
        // a~b, b~c, but a !~ c
        let images = vec![
            image("/a.png", &[false, false, false, false]),
            image("/b.png", &[true, false, false, false]),
            image("/c.png", &[true, true, false, false]),
        ];
        let groups = find_similar_groups(&images, 1);

        let keys: Vec<Vec<PathBuf>> = groups.iter().map(|g| g.membership_key()).collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            keys[0],
            vec![PathBuf::from("/a.png"), PathBuf::from("/b.png")]
        );
        assert_eq!(
            keys[1],
            vec![
                PathBuf::from("/a.png"),
                PathBuf::from("/b.png"),
                PathBuf::from("/c.png")
            ]
        );
        assert_eq!(
            keys[2],
            vec![PathBuf::from("/b.png"), PathBuf::from("/c.png")]
        );
    }

    #[test]
    fn test_same_path_twice_matches_itself_by_index() {
        let images = vec![
            image("/dup.png", &[true, false]),
            image("/dup.png", &[true, false]),
        ];
        let groups = find_similar_groups(&images, 0);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_progress_reported_every_interval() {
        let images: Vec<HashedImage> = (0..25)
            .map(|i| image(&format!("/{}.png", i), &[i % 2 == 0]))
            .collect();
        let mut ticks = Vec::new();
        find_similar_groups_with_progress(&images, 0, |n| ticks.push(n));
        assert_eq!(ticks, vec![10, 20]);
    }
}
