#[derive(Clone, Debug)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
}
