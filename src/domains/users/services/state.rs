// Users domain state
// 프로필 도메인 상태
use crate::domains::users::services::ProfileService;
use crate::shared::database::Database;

/// Profile domain state
/// 프로필 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct ProfileState {
    pub profile_service: ProfileService,
}

impl ProfileState {
    /// Create ProfileState with database
    /// ProfileState 생성 (데이터베이스 필요)
    pub fn new(db: Database) -> Self {
        Self {
            profile_service: ProfileService::new(db),
        }
    }
}
