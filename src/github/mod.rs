pub mod pages;

#[derive(Clone)]
pub struct Github {
    pub host: String,
    pub token: String,
}
