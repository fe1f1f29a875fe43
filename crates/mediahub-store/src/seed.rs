//! # Seed Data
//!
//! The sample catalog loaded at startup.
//!
//! Rankings point at media by their position in the same batch, so the ids
//! they end up with depend only on insertion order:
//!
//! ```text
//! media[0] ──► id 1 ◄── rank 1
//! media[1] ──► id 2 ◄── rank 2
//! media[2] ──► id 3 ◄── rank 3
//! media[3] ──► id 4
//! ```
//!
//! On a fresh store that reproduces "first three ids get ranks 1-3".

use mediahub_core::{NewMedia, MEDIA_TYPE_MUSIC, MEDIA_TYPE_VIDEO};

/// A ranking entry that references media by batch position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRanking {
    /// Index into [`SeedData::media`].
    pub media_index: usize,
    pub rank: i32,
    pub downloads: u64,
}

/// A batch of media plus the rankings over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub media: Vec<NewMedia>,
    pub rankings: Vec<SeedRanking>,
}

impl SeedData {
    /// Two music tracks, two videos, and a top three.
    pub fn sample() -> Self {
        let media = vec![
            sample_media(
                "Trending Hits 2024",
                "Various Artists",
                MEDIA_TYPE_MUSIC,
                "Pop",
                "3:45",
                1_200_000,
                true,
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
                "/downloads/trending-hits-2024.mp3",
            ),
            sample_media(
                "Electronic Beats",
                "DJ Master",
                MEDIA_TYPE_MUSIC,
                "Electronic",
                "4:20",
                890_000,
                true,
                "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
                "/downloads/electronic-beats.mp3",
            ),
            sample_media(
                "Music Video Collection",
                "Various Artists",
                MEDIA_TYPE_VIDEO,
                "Music Video",
                "3:45",
                950_000,
                false,
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
                "/downloads/music-video-collection.mp4",
            ),
            sample_media(
                "Live Concert Highlights",
                "Concert Crew",
                MEDIA_TYPE_VIDEO,
                "Concert",
                "45:30",
                780_000,
                false,
                "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200",
                "/downloads/live-concert.mp4",
            ),
        ];

        let rankings = vec![
            SeedRanking { media_index: 0, rank: 1, downloads: 1_200_000 },
            SeedRanking { media_index: 1, rank: 2, downloads: 890_000 },
            SeedRanking { media_index: 2, rank: 3, downloads: 950_000 },
        ];

        SeedData { media, rankings }
    }

    /// First ranking whose `media_index` falls outside the batch.
    pub(crate) fn first_out_of_range(&self) -> Option<&SeedRanking> {
        self.rankings
            .iter()
            .find(|r| r.media_index >= self.media.len())
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_media(
    title: &str,
    artist: &str,
    media_type: &str,
    category: &str,
    duration: &str,
    downloads: u64,
    featured: bool,
    image_url: &str,
    file_url: &str,
) -> NewMedia {
    NewMedia {
        title: title.to_string(),
        artist: artist.to_string(),
        media_type: media_type.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        downloads,
        featured,
        image_url: image_url.to_string(),
        file_url: file_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let seed = SeedData::sample();
        assert_eq!(seed.media.len(), 4);
        assert_eq!(seed.rankings.len(), 3);
        assert!(seed.first_out_of_range().is_none());

        let music = seed
            .media
            .iter()
            .filter(|m| m.media_type == MEDIA_TYPE_MUSIC)
            .count();
        assert_eq!(music, 2);
    }

    #[test]
    fn test_sample_snapshots_match_media() {
        let seed = SeedData::sample();
        for ranking in &seed.rankings {
            assert_eq!(ranking.downloads, seed.media[ranking.media_index].downloads);
        }
    }

    #[test]
    fn test_out_of_range_detected() {
        let seed = SeedData {
            media: Vec::new(),
            rankings: vec![SeedRanking { media_index: 0, rank: 1, downloads: 0 }],
        };
        assert_eq!(seed.first_out_of_range().map(|r| r.rank), Some(1));
        assert!(SeedData::default().first_out_of_range().is_none());
    }
}
