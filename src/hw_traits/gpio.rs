/// Register operations of one GPIO port.
///
/// All methods take full-width bit masks; `set` ORs the mask into the
/// register, `clear` ANDs its complement. The port-control method pair works
/// the same way on the 4-bit-per-pin mode field, so callers pass nibble
/// masks. `lock_wr` is a plain write because the lock register consumes a
/// magic value rather than bits.
pub trait GpioPeriph {
    fn data_set(&self, bits: u32);
    fn data_clear(&self, bits: u32);

    fn dir_set(&self, bits: u32);
    fn dir_clear(&self, bits: u32);

    fn afsel_set(&self, bits: u32);
    fn afsel_clear(&self, bits: u32);

    fn pur_set(&self, bits: u32);
    fn pur_clear(&self, bits: u32);

    fn pdr_set(&self, bits: u32);
    fn pdr_clear(&self, bits: u32);

    fn den_set(&self, bits: u32);
    fn den_clear(&self, bits: u32);

    fn amsel_set(&self, bits: u32);
    fn amsel_clear(&self, bits: u32);

    fn pctl_set(&self, bits: u32);
    fn pctl_clear(&self, bits: u32);

    fn lock_wr(&self, value: u32);
    fn cr_set(&self, bits: u32);
}
