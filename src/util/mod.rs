pub(crate) mod base64helper;
pub(crate) mod did_url;
