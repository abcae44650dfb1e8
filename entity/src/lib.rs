pub mod rsvp;

/*
 Guests never get accounts. An RSVP is a one-shot record: the form posts it,
 the couple reads the totals. Records are created once and kept forever,
 there is no edit or delete path anywhere in the system.
 */
