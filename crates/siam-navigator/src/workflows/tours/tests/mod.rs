mod common;
mod financial;
mod routing;
