//! Cross sections and rates against published and reference numbers
//!
//! Experimental references: Watanabe and Marrs (H-like and bare Mo),
//! Trzhaskovskaya (calculated RR of Fe), Kravis (CX of Ar). The
//! semi-empirical formulas are expected within 30 % on average.

use csd_rs::atomic::{shell_stat, ElementDataProvider, ShellStat};
use csd_rs::cross_sections::{cx_cross_section, ei_lotz_cross_section, rr_cross_section, CaptureOrder};
use csd_rs::models::{compute_rates, csd_derivative, ion_velocity, neutral_density, BeamConditions};

mod common;
use common::{aufbau_structure, fixture_library, mean_relative_error, relative_error};

// ====== Element data ======

#[test]
fn test_hydrogen_binding_energy_from_json() {
    let library = fixture_library();
    let hydrogen = library.structure("H").unwrap();
    let subshell = hydrogen.record(0).unwrap().get("1s").unwrap();
    assert!(relative_error(subshell.binding_energy, 13.5984487) < 1e-12);
}

#[test]
fn test_argon_neutral_shell_stat() {
    let argon = aufbau_structure("Ar");
    let stat = shell_stat(&argon, 0).unwrap();
    assert_eq!(
        stat,
        ShellStat { principal_quantum_number: 3, shell_capacity: 18, shell_population: 8 }
    );
}

// ====== Electron-impact ionization ======

#[test]
fn test_mo_ei_watanabe() {
    let mo = aufbau_structure("Mo");
    let sigma = ei_lotz_cross_section(&mo, 41, 64400.0).unwrap();
    let error = relative_error(sigma, 3.13e-23);
    println!("Error Watanabe Mo: {error:.3}");
    assert!(error < 0.3);
}

#[test]
fn test_mo_ei_marrs() {
    let mo = aufbau_structure("Mo");
    let reference = [(31500.0, 15.9e-24), (36100.0, 21.2e-24), (64800.0, 30.8e-24), (95600.0, 34.7e-24)];

    let pairs: Vec<_> = reference
        .iter()
        .map(|&(e_e, sigma)| (ei_lotz_cross_section(&mo, 41, e_e).unwrap(), sigma))
        .collect();

    let error = mean_relative_error(&pairs);
    println!("Mean error EI Marrs Mo: {error:.3}");
    assert!(error < 0.3);
}

// ====== Radiative recombination ======

#[test]
fn test_mo_rr_marrs() {
    let mo = aufbau_structure("Mo");
    let reference = [(31500.0, 90.33e-24), (36100.0, 72.39e-24), (64800.0, 26.56e-24), (95600.0, 13.01e-24)];

    let pairs: Vec<_> = reference
        .iter()
        .map(|&(e_e, sigma)| (rr_cross_section(&mo, 42, e_e).unwrap(), sigma))
        .collect();

    let error = mean_relative_error(&pairs);
    println!("Mean error RR Marrs Mo: {error:.3}");
    assert!(error < 0.3);
}

#[test]
fn test_fe_rr_trzhaskovskaya() {
    let fe = aufbau_structure("Fe");
    let energies = [2964.00, 9645.96, 15464.38, 31391.56, 50326.87];
    let reference: [(usize, [f64; 5]); 4] = [
        (8, [1.040e-23, 1.1780e-24, 4.797e-25, 1.2e-25, 4.632e-26]),
        (16, [5.267e-23, 6.551e-24, 2.698e-24, 6.786e-25, 2.622e-25]),
        (24, [2.304e-22, 3.022e-23, 1.268e-23, 3.261e-24, 1.272e-24]),
        (26, [7.076e-22, 1.291e-22, 6.088e-23, 1.790e-23, 7.427e-24]),
    ];

    let mut pairs = Vec::new();
    for (charge_state, sigmas) in reference {
        for (&e_e, &sigma) in energies.iter().zip(&sigmas) {
            pairs.push((rr_cross_section(&fe, charge_state, e_e).unwrap(), sigma));
        }
    }

    let error = mean_relative_error(&pairs);
    println!("Mean error RR Trzhaskovskaya Fe: {error:.3}");
    assert!(error < 0.3);
}

#[test]
fn test_neutral_atoms_do_not_recombine() {
    for symbol in ["Ar", "Mo", "Au"] {
        let structure = aufbau_structure(symbol);
        for e_e in [10.0, 2000.0, 64400.0] {
            assert_eq!(rr_cross_section(&structure, 0, e_e).unwrap(), 0.0, "{symbol} at {e_e} eV");
        }
    }
}

// ====== Charge exchange ======

#[test]
fn test_ar_cx_kravis() {
    let reference = [(6, 7.05e-15), (7, 8.93e-15), (8, 7.54e-15), (9, 12.1e-15), (11, 20.5e-15)];

    let pairs: Vec<_> = reference
        .iter()
        .map(|&(i, sigma)| (cx_cross_section(i, CaptureOrder::Single, 13.6), sigma))
        .collect();

    let error = mean_relative_error(&pairs);
    println!("Mean error CX Kravis Ar: {error:.3}");
    assert!(error < 0.3);
}

// ====== Evolution ======

#[test]
fn test_csd_evolution_unit_cascade() {
    let n = 10;
    let rei = vec![1.0; n];
    let zeros = vec![0.0; n];
    let dydt = csd_derivative(&vec![1.0; n], 0.0, &rei, &zeros, &zeros).unwrap();

    let mut expected = vec![0.0; n];
    expected[0] = -1.0;
    expected[n - 1] = 1.0;

    let norm: f64 = dydt.iter().zip(&expected).map(|(a, b)| (a - b).powi(2)).sum::<f64>().sqrt();
    assert!(norm < 1e-6);
}

// ====== Kinetics ======

#[test]
fn test_neutral_density() {
    let expected = 100.0 * 1.0 / (1.38e-23 * 300.0) * 1e-6;
    assert!(relative_error(neutral_density(1.0, 300.0), expected) < 1e-12);
}

#[test]
fn test_hydrogen_ion_velocity() {
    let library = fixture_library();
    let hydrogen = library.structure("H").unwrap();

    let mass: f64 = 1.0079 * 1.6726e-27;
    let expected = 100.0 * (8.0 * 100.0 * 1.6e-19 / (3.1416 * mass)).sqrt();
    assert!(relative_error(ion_velocity(hydrogen.element(), 100.0), expected) < 1e-12);
}

#[test]
fn test_helium_rates() {
    let library = fixture_library();
    let helium = library.structure("He").unwrap();

    let beam = BeamConditions::new(100.0, 100.0, 100.0, 1e-10).with_ionization_potential(13.6);
    let rates = compute_rates(helium, &beam, &helium.charge_states()).unwrap();

    let expected = [
        [26417.58181096, 1746.13008181, 0.0],
        [0.0, 0.00387869, 0.02672259],
        [0.0, 0.02004152, 0.04509577],
    ];
    let computed = [&rates.ionization, &rates.recombination, &rates.charge_exchange];

    for (row, values) in computed.iter().zip(&expected) {
        for (&actual, &reference) in row.iter().zip(values) {
            if reference == 0.0 {
                assert_eq!(actual, 0.0);
            } else {
                assert!(
                    relative_error(actual, reference) < 1e-6,
                    "rate {actual} differs from {reference}"
                );
            }
        }
    }
}
