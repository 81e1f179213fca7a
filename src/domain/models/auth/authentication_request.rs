use crate::domain::entities::users::user::UserRole;

/// 요구되는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(UserRole),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<UserRole>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: UserRole) -> bool {
        match self {
            RequiredRole::Single(required_role) => *required_role == role,
            RequiredRole::Any(required_roles) => required_roles.contains(&role),
        }
    }
}
