pub mod callout_card;
pub mod page_header;
pub mod topic_pager;
pub mod ui;

pub use callout_card::CalloutCard;
pub use page_header::PageHeader;
pub use topic_pager::TopicPager;
