/// Run-mode clock gating for the GPIO ports, one enable bit per port.
///
/// The read method exists so the engine can perform the settle read the
/// hardware requires after gating a clock on.
pub trait SysctlPeriph {
    fn rcgc2_rd(&self) -> u32;
    fn rcgc2_set(&self, bits: u32);
}
