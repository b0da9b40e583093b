//! Trivector coherence data, indexed `[previous][current][next]` by vector id.
//!
//! Column order in every row:
//! STP Nos Nom Nol Nes Nem Eas Eam Eal Ses Sem Sos Som Sol Sws Swm Wes Wem Wel Nws Nwm

const T: bool = true;
const F: bool = false;

pub(super) const COHERENCE: [[[bool; 21]; 21]; 21] = [
    // previous: STP
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // STP Nwm
    ],
    // previous: Nos
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Nol
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nos Nes
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nos Nem
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Eas
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Eam
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nos Swm
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Wes
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Wem
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nos Nwm
    ],
    // previous: Nom
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Nol
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nom Nes
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nom Nem
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Eas
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Eam
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nom Swm
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Wes
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Wem
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nom Nwm
    ],
    // previous: Nol
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Nol
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nol Nes
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nol Nem
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Eas
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Eam
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nol Swm
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Wes
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Wem
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nol Nwm
    ],
    // previous: Nes
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nes Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nes Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nes Nol
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T], // Nes Nes
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T], // Nes Nem
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nes Eas
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nes Eam
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nes Eal
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nes Ses
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nes Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nes Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nes Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nes Nwm
    ],
    // previous: Nem
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nem Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nem Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T], // Nem Nol
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T], // Nem Nes
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T], // Nem Nem
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nem Eas
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nem Eam
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nem Eal
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nem Ses
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Nem Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nem Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nem Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nem Nwm
    ],
    // previous: Eas
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Nol
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eas Nes
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eas Nem
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Eas
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Eam
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Eal
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Ses
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eas Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eas Nwm
    ],
    // previous: Eam
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Nol
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eam Nes
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eam Nem
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Eas
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Eam
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Eal
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Ses
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eam Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eam Nwm
    ],
    // previous: Eal
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal STP
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Nos
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Nom
        [F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Nol
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eal Nes
        [F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Eal Nem
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Eas
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Eam
        [F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Eal
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Ses
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Eal Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Eal Nwm
    ],
    // previous: Ses
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Nol
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Ses Nes
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Ses Nem
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Ses Eas
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Ses Eam
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Ses Eal
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Ses
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Ses Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Ses Nwm
    ],
    // previous: Sem
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Nol
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Sem Nes
        [F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F], // Sem Nem
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sem Eas
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sem Eam
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sem Eal
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Ses
        [F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Sem Swm
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Wes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Wem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sem Nwm
    ],
    // previous: Sos
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sos Eas
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sos Eam
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sos Eal
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sos Ses
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sos Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sos Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sos Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sos Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sos Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sos Swm
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sos Wes
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sos Wem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sos Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sos Nwm
    ],
    // previous: Som
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Som Eas
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Som Eam
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Som Eal
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Som Ses
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Som Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Som Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Som Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Som Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Som Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Som Swm
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Som Wes
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Som Wem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Som Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Som Nwm
    ],
    // previous: Sol
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sol Eas
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sol Eam
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F, F, F, F, F, F], // Sol Eal
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sol Ses
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F, F, F, F], // Sol Sem
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sol Sos
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sol Som
        [F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T, T, F, F], // Sol Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sol Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sol Swm
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sol Wes
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sol Wem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Sol Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sol Nwm
    ],
    // previous: Sws
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Sws Eal
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Sws Ses
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Sws Sem
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sws Sos
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sws Som
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Sws Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T], // Sws Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T], // Sws Swm
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Sws Wes
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Sws Wem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Sws Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Sws Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Sws Nwm
    ],
    // previous: Swm
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm STP
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Nos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Nom
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Swm Eal
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Swm Ses
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, F, F, F], // Swm Sem
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Swm Sos
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Swm Som
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, F, F], // Swm Sol
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T], // Swm Sws
        [F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T, T, T], // Swm Swm
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Swm Wes
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Swm Wem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Swm Wel
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Swm Nws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Swm Nwm
    ],
    // previous: Wes
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes STP
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wes Nos
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wes Nom
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wes Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wes Sem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wes Sos
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wes Som
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wes Sol
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wes Sws
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wes Swm
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wes Wes
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wes Wem
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wes Wel
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wes Nws
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wes Nwm
    ],
    // previous: Wem
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem STP
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wem Nos
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wem Nom
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wem Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wem Sem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wem Sos
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wem Som
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wem Sol
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wem Sws
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wem Swm
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wem Wes
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wem Wem
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wem Wel
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wem Nws
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wem Nwm
    ],
    // previous: Wel
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel STP
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wel Nos
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wel Nom
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Wel Nol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Nes
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Wel Sem
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wel Sos
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wel Som
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, F, F], // Wel Sol
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wel Sws
        [F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wel Swm
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wel Wes
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wel Wem
        [F, T, T, T, F, F, F, F, F, F, F, T, T, T, T, T, T, T, T, T, T], // Wel Wel
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wel Nws
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Wel Nwm
    ],
    // previous: Nws
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws STP
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nws Nos
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nws Nom
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nws Nol
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nws Nes
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nws Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nws Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Swm
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Wes
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Wem
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nws Nwm
    ],
    // previous: Nwm
    [
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm STP
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nwm Nos
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nwm Nom
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T], // Nwm Nol
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nwm Nes
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T], // Nwm Nem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Eas
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Eam
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Eal
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Ses
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Sem
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Sos
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Som
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F, F], // Nwm Sol
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Sws
        [F, F, F, F, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Swm
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Wes
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Wem
        [F, T, T, T, F, F, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Wel
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Nws
        [F, T, T, T, T, T, F, F, F, F, F, F, F, F, T, T, T, T, T, T, T], // Nwm Nwm
    ],
];
