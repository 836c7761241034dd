//----------------------------------------
// sampling mod
//----------------------------------------
pub mod simulate_power;
