mod file;
mod mission;
mod tag;
mod topic;
mod wire;

pub use self::file::{FileRecord, MissionDetails};
pub use self::mission::{Mission, MissionRef, NewMission};
pub use self::tag::{DEFAULT_NEW_TAG_COLOR, FALLBACK_TAG_COLOR, MAX_TAG_NAME_LEN, Tag};
pub use self::topic::{Topic, TopicName};
pub(crate) use self::file::{total_duration_secs, total_size_bytes};
pub(crate) use self::wire::MissionFilesPayload;
