/// Convenience type so module errors can be mixed freely with `?`
pub type Result<T = ()> = anyhow::Result<T>;
