use std::cell::RefCell;
use std::rc::Rc;

use gimnasio_overlay::OverlayConfig;
use gimnasio_overlay::OverlayStack;
use gimnasio_overlay::StackOp;
use pretty_assertions::assert_eq;

fn planificacion() -> OverlayConfig {
    OverlayConfig::Planificacion {
        codigo: "2025-11-mes-ciencia".to_string(),
        tema: "astronomia".to_string(),
    }
}

fn actividad(semana: &str) -> OverlayConfig {
    OverlayConfig::Actividad {
        semana_id: semana.to_string(),
    }
}

fn op_for(index: usize, step: usize) -> StackOp {
    match index {
        0 => StackOp::Push(actividad(&format!("semana-{step}"))),
        1 => StackOp::Pop,
        2 => StackOp::Replace(OverlayConfig::Resultados {
            actividad_id: format!("act-{step}"),
        }),
        3 => StackOp::Clear,
        _ => StackOp::Push(OverlayConfig::Tienda),
    }
}

#[test]
fn every_short_op_sequence_keeps_the_stack_invariants() {
    const OPS: usize = 5;
    const LEN: u32 = 5;

    for code in 0..OPS.pow(LEN) {
        let stack = OverlayStack::new();
        let mut model: Vec<OverlayConfig> = Vec::new();
        let mut rest = code;
        for step in 0..LEN as usize {
            let op = op_for(rest % OPS, step);
            rest /= OPS;

            let before = stack.depth();
            match &op {
                StackOp::Push(config) => {
                    model.push(config.clone());
                    stack.push(config.clone());
                    assert_eq!(before + 1, stack.depth());
                    assert_eq!(Some(config.clone()), stack.current_overlay());
                }
                StackOp::Pop => {
                    model.pop();
                    stack.pop();
                    assert_eq!(before.saturating_sub(1), stack.depth());
                }
                StackOp::Replace(config) => {
                    model.pop();
                    model.push(config.clone());
                    stack.replace(config.clone());
                    assert_eq!(before.max(1), stack.depth());
                    assert_eq!(Some(config.clone()), stack.current_overlay());
                }
                StackOp::Clear => {
                    model.clear();
                    stack.clear();
                    assert_eq!(0, stack.depth());
                }
            }

            let snapshot = stack.snapshot();
            assert_eq!(model.as_slice(), snapshot.entries(), "sequence {code}");
            assert_eq!(snapshot.depth() > 0, stack.can_go_back());
            assert_eq!(model.last(), snapshot.current());
        }
    }
}

#[test]
fn push_then_pop_restores_the_previous_stack() {
    let stack = OverlayStack::new();
    stack.push(OverlayConfig::MiGrupo);
    stack.push(planificacion());
    let before = stack.snapshot();

    stack.push(actividad("semana-1"));
    stack.pop();

    assert_eq!(before, stack.snapshot());
}

#[test]
fn replace_swaps_only_the_top() {
    let stack = OverlayStack::new();
    stack.push(planificacion());
    stack.push(OverlayConfig::EjecutarActividad {
        actividad_id: "act-7".to_string(),
        semana_id: "semana-2".to_string(),
    });

    let resultados = OverlayConfig::Resultados {
        actividad_id: "act-7".to_string(),
    };
    stack.replace(resultados.clone());

    assert_eq!(vec![planificacion(), resultados], stack.snapshot().entries());
}

#[test]
fn clear_is_observed_as_a_single_transition() {
    let stack = OverlayStack::new();
    for week in 0..4 {
        stack.push(actividad(&format!("semana-{week}")));
    }

    let depths = Rc::new(RefCell::new(Vec::new()));
    let _subscription = stack.subscribe({
        let depths = Rc::clone(&depths);
        move |transition| {
            depths
                .borrow_mut()
                .push((transition.previous.depth(), transition.current.depth()));
        }
    });
    stack.clear();

    assert_eq!(vec![(4, 0)], *depths.borrow());
}

#[test]
fn navigation_from_inside_a_subscriber_is_applied_after_the_round() {
    let stack = OverlayStack::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    // Opening a planificación immediately drills into its first week.
    let _drill_down = stack.subscribe({
        let stack = stack.clone();
        move |transition| {
            if matches!(transition.op, StackOp::Push(OverlayConfig::Planificacion { .. })) {
                stack.push(actividad("semana-1"));
            }
        }
    });
    let _recorder = stack.subscribe({
        let seen = Rc::clone(&seen);
        move |transition| seen.borrow_mut().push(transition.current.depth())
    });

    stack.push(planificacion());

    assert_eq!(vec![1, 2], *seen.borrow());
    assert_eq!(Some(actividad("semana-1")), stack.current_overlay());
}
