pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod example;
pub(crate) mod hierarchy;
pub(crate) mod points;
