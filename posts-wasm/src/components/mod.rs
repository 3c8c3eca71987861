pub(crate) mod pager;
pub(crate) mod post_card;
