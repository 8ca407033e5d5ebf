// Domain layer: the coffee record value type. No dependencies beyond std.

pub mod model;
