pub(crate) mod pairs;
pub(crate) mod text;
