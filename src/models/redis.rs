use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn user(user_id: Uuid) -> String {
        format!("user:{user_id}")
    }

    pub fn user_email(email: &str) -> String {
        let email = email.to_lowercase();
        format!("user_email:{email}")
    }

    pub fn users_index() -> &'static str {
        "users"
    }

    pub fn user_params(user_id: Uuid) -> String {
        format!("user_params:{user_id}")
    }

    pub fn organization(id: u64) -> String {
        format!("org:{id}")
    }

    pub fn organization_owner(owner_id: Uuid) -> String {
        format!("org_owner:{owner_id}")
    }

    pub fn organization_address(address: &str) -> String {
        let address = address.trim().to_lowercase();
        format!("org_address:{address}")
    }

    pub fn organizations_by_type(organization_type: &str) -> String {
        let organization_type = organization_type.to_lowercase();
        format!("orgs:type:{organization_type}")
    }

    pub fn organization_next_id() -> &'static str {
        "org:next_id"
    }

    pub fn aggregate(organization_id: u64) -> String {
        format!("org:{organization_id}:params")
    }

    pub fn comments(organization_id: u64) -> String {
        format!("org:{organization_id}:comments")
    }

    pub fn comment_next_id() -> &'static str {
        "comment:next_id"
    }
}
